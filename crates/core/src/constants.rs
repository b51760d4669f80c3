/// Logical collection name for persisted accounts.
pub const ACCOUNTS_COLLECTION: &str = "accounts";

/// Logical collection name for persisted investments.
pub const INVESTMENTS_COLLECTION: &str = "investments";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
