//! Domain models
//!
//! One module per back-office domain. All types are plain wire DTOs;
//! nothing here owns state beyond the duration of a call.

pub mod cash;
pub mod design;
pub mod item;
pub mod member;
pub mod order;
pub mod print;
pub mod receipt;
pub mod user;

pub use cash::{CashRecord, CashRecordListRequest, CreateCashRecordRequest, OpenCashDrawerRequest};
pub use design::{CreateDesignRequest, DesignData, DesignListRequest, ModifyDesignRequest};
pub use item::{HotColdItem, HotColdListRequest, HotColdType, InventoryRecord, InventoryRecordListRequest};
pub use member::{
    CreateMemberRequest, MemberData, MemberListRequest, MemberPurchaseHistoryRequest,
    MemberPurchaseRecord, ModifyMemberRequest, TopUpMemberRequest,
};
pub use order::{OrderData, OrderLine, OrderListRequest, OrderStatus};
pub use print::{PrintReceiptRequest, ReceiptLine};
pub use receipt::{ReceiptData, ReceiptListRequest};
pub use user::{CreateUserRequest, LoginRequest, ModifyUserRequest, UserData, UserListRequest, UserType};
