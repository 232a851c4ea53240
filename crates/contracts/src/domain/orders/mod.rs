mod dto;
mod status;

pub use dto::{OrderDto, OrderListMeta, OrderListQuery, OrderListResponse};
pub use status::{OrderStatus, StatusFilter};
