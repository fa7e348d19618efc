//! Permission resolver
//!
//! Pure lookup tables from a user category to what it may see and do.
//! No state, no I/O: the tables are fixed at compile time. Unknown user
//! categories fall back to the richest (admin) table so a newer server
//! never locks an operator out of the client entirely.

use shared::models::UserType;

/// Back-office pages a user can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Page {
    DesignManagement,
    OrderManagement,
    HotColdItems,
    InventoryRecords,
    MemberManagement,
    BillManagement,
    CashManagement,
    UserManagement,
}

const ALL_PAGES: &[Page] = &[
    Page::DesignManagement,
    Page::OrderManagement,
    Page::HotColdItems,
    Page::InventoryRecords,
    Page::MemberManagement,
    Page::BillManagement,
    Page::CashManagement,
    Page::UserManagement,
];

const SALER_PAGES: &[Page] = &[
    Page::DesignManagement,
    Page::OrderManagement,
    Page::HotColdItems,
    Page::InventoryRecords,
    Page::MemberManagement,
    Page::BillManagement,
];

const FINANCE_PAGES: &[Page] = &[
    Page::MemberManagement,
    Page::BillManagement,
    Page::CashManagement,
];

const LOGISTICS_PAGES: &[Page] = &[Page::OrderManagement];

/// Pages the given user category may open
pub fn accessible_pages(user_type: UserType) -> &'static [Page] {
    match user_type {
        UserType::Saler => SALER_PAGES,
        UserType::Finance => FINANCE_PAGES,
        UserType::Logistics => LOGISTICS_PAGES,
        UserType::Admin | UserType::Unknown => ALL_PAGES,
    }
}

/// Whether the given user category may use a named feature.
///
/// Features are enumerated as denylists per category; any feature name
/// not listed for a category is allowed. That permissive default is the
/// documented contract of the remote system, kept as-is.
pub fn can_use_feature(user_type: UserType, feature: &str) -> bool {
    match user_type {
        UserType::Admin | UserType::Unknown => true,
        UserType::Saler => !matches!(
            feature,
            "deleteMember" | "cashManagement" | "userManagement"
        ),
        UserType::Finance => !matches!(feature, "deleteMember" | "userManagement"),
        UserType::Logistics => !matches!(
            feature,
            "deleteMember" | "cashManagement" | "userManagement" | "topUpMember"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saler_pages_are_the_fixed_set() {
        assert_eq!(
            accessible_pages(UserType::Saler),
            &[
                Page::DesignManagement,
                Page::OrderManagement,
                Page::HotColdItems,
                Page::InventoryRecords,
                Page::MemberManagement,
                Page::BillManagement,
            ]
        );
    }

    #[test]
    fn logistics_only_sees_orders() {
        assert_eq!(accessible_pages(UserType::Logistics), &[Page::OrderManagement]);
    }

    #[test]
    fn unknown_category_gets_the_admin_table() {
        assert_eq!(accessible_pages(UserType::Unknown), ALL_PAGES);
    }

    #[test]
    fn finance_may_use_cash_management() {
        assert!(can_use_feature(UserType::Finance, "cashManagement"));
    }

    #[test]
    fn saler_may_not_delete_members() {
        assert!(!can_use_feature(UserType::Saler, "deleteMember"));
    }

    #[test]
    fn unlisted_features_default_to_allowed() {
        for user_type in [
            UserType::Admin,
            UserType::Saler,
            UserType::Finance,
            UserType::Logistics,
            UserType::Unknown,
        ] {
            assert!(can_use_feature(user_type, "someBrandNewFeature"));
        }
    }
}
