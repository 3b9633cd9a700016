//! Column names shared by the 2023 TKDD source tables
//!
//! TKDD (Transfer ke Daerah dan Dana Desa) is the national transfer to
//! regional governments and village funds. Both sources carry one row per
//! province (38 in 2023) and are addressed by exact header name; a missing
//! header surfaces as `ColumnError::NotFound` at the first view that
//! touches it.

/// Province name, unique per row
pub const PROVINCE: &str = "province";

/// Budgeted TKDD allocation (pagu), millions of rupiah
pub const CEILING: &str = "tkdd_ceiling";

/// Disbursed TKDD amount (realisasi), millions of rupiah
pub const DISBURSED: &str = "tkdd_disbursed";

/// Mid-2023 population, persons
pub const POPULATION: &str = "population";

/// Central government spending per resident, thousands of rupiah
pub const APBN_PER_CAPITA: &str = "apbn_per_capita";

/// Share of residents below the poverty line, percent
pub const POOR_PCT: &str = "poor_pct";

/// Gross regional domestic product at current prices, billions of rupiah
pub const GRDP_CURRENT: &str = "grdp_current";

/// GRDP per resident at current prices, thousands of rupiah
pub const GRDP_PER_CAPITA: &str = "grdp_per_capita";

/// Year-on-year GRDP growth, percent
pub const GRDP_GROWTH: &str = "grdp_growth";

/// Human Development Index, 0-100 scale
pub const HDI: &str = "hdi";

/// HDI band assigned by the statistics bureau
pub const HDI_CATEGORY: &str = "hdi_category";

/// Realization band ("90-100%" or ">100%")
pub const REALIZATION_CATEGORY: &str = "realization_category";

/// Derived: disbursed over ceiling, percent
pub const REALIZATION_PCT: &str = "realization_pct";

/// Derived: ceiling share of ceiling + disbursed, percent
pub const CEILING_SHARE_PCT: &str = "ceiling_share_pct";

/// Derived: disbursed share of ceiling + disbursed, percent
pub const DISBURSED_SHARE_PCT: &str = "disbursed_share_pct";

/// HDI bands in display order, highest first. Contingency tables over
/// `hdi_category` present their rows in this order.
pub const HDI_CATEGORY_ORDER: [&str; 3] = ["Very High", "High", "Medium"];
