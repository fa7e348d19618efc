//! Endpoint registry
//!
//! Static mapping of logical operations to URL paths, grouped per
//! domain. Every typed operation module resolves its path here so the
//! surface of the remote API is visible in one place.

pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const LOGOUT: &str = "/auth/logout";
}

pub mod user {
    pub const PAGE: &str = "/user/page";
    pub const CREATE: &str = "/user/create";
    pub const MODIFY: &str = "/user/modify";
    pub const DELETE: &str = "/user/delete";
}

pub mod member {
    pub const PAGE: &str = "/member/page";
    pub const CREATE: &str = "/member/create";
    pub const MODIFY: &str = "/member/modify";
    pub const DELETE: &str = "/member/delete";
    pub const TOP_UP: &str = "/member/top-up";
    pub const PURCHASE_HISTORY_PAGE: &str = "/memberPurchaseHistory/page";
}

pub mod design {
    pub const PAGE: &str = "/design/page";
    pub const CREATE: &str = "/design/create";
    pub const MODIFY: &str = "/design/modify";
    pub const DELETE: &str = "/design/delete";
    pub const UPLOAD: &str = "/design/upload";
}

pub mod item {
    pub const INVENTORY_RECORD_PAGE: &str = "/itemRecord/page";
}

pub mod order {
    pub const PAGE: &str = "/order/page";
    pub const DETAIL: &str = "/order/detail";
}

pub mod receipt {
    pub const PAGE: &str = "/receipt/page";
}

pub mod cash {
    pub const DRAWER_OPEN: &str = "/cashDrawer/open";
    pub const RECORD_PAGE: &str = "/cash/page";
    pub const RECORD_CREATE: &str = "/cash/create";
}

pub mod print {
    pub const RECEIPT: &str = "/print/receipt";
}
