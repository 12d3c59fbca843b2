//! Customer classification codes as stored in the `cust` table.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i64)]
pub enum CustomerType {
    Full = 1,
    Associate = 2,
    Internal = 3,
    ProBono = 4,
}

impl CustomerType {
    pub const ALL: [CustomerType; 4] = [
        CustomerType::Full,
        CustomerType::Associate,
        CustomerType::Internal,
        CustomerType::ProBono,
    ];

    pub fn code(self) -> i64 {
        self as i64
    }

    /// Associate members have no ports and never exchange traffic.
    pub fn is_trafficking(self) -> bool {
        self != CustomerType::Associate
    }

    pub fn is_external(self) -> bool {
        self != CustomerType::Internal
    }

    /// Codes of every type failing `keep`, for `NOT IN` clauses.
    pub fn codes_excluded_by(keep: impl Fn(CustomerType) -> bool) -> Vec<i64> {
        Self::ALL
            .into_iter()
            .filter(|t| !keep(*t))
            .map(CustomerType::code)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i64)]
pub enum CustomerStatus {
    Normal = 1,
    NotConnected = 2,
    Suspended = 3,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 3] = [
        CustomerStatus::Normal,
        CustomerStatus::NotConnected,
        CustomerStatus::Suspended,
    ];

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn is_active(self) -> bool {
        matches!(self, CustomerStatus::Normal | CustomerStatus::NotConnected)
    }

    pub fn active_codes() -> Vec<i64> {
        Self::ALL
            .into_iter()
            .filter(|s| s.is_active())
            .map(CustomerStatus::code)
            .collect()
    }
}
