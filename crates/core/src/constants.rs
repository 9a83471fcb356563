/// Base currency for engines constructed without an override
pub const DEFAULT_CURRENCY: &str = "USD";

/// Display name given to newly built portfolios
pub const DEFAULT_PORTFOLIO_NAME: &str = "My Portfolio";

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
