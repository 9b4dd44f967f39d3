pub mod authentication;
pub mod backend_key_data;
pub mod bind_complete;
pub mod close_complete;
pub mod command_complete;
pub mod copy_both_response;
pub mod copy_data;
pub mod copy_done;
pub mod copy_in_response;
pub mod copy_out_response;
pub mod copy_response;
pub mod data_row;
pub mod empty_query_response;
pub mod error_response;
pub mod function_call_response;
pub mod negotiate_protocol_version;
pub mod no_data;
pub mod notice_response;
pub mod notification_response;
pub mod parameter_description;
pub mod parameter_status;
pub mod parse_complete;
pub mod portal_suspended;
pub mod ready_for_query;
pub mod response_fields;
pub mod row_description;

pub use authentication::AuthenticationFrame;
pub use backend_key_data::BackendKeyDataFrame;
pub use bind_complete::BindCompleteFrame;
pub use close_complete::CloseCompleteFrame;
pub use command_complete::CommandCompleteFrame;
pub use copy_both_response::CopyBothResponseFrame;
pub use copy_data::CopyDataFrame;
pub use copy_done::CopyDoneFrame;
pub use copy_in_response::CopyInResponseFrame;
pub use copy_out_response::CopyOutResponseFrame;
pub use copy_response::ColumnFormats;
pub use data_row::DataRowFrame;
pub use empty_query_response::EmptyQueryResponseFrame;
pub use error_response::ErrorResponseFrame;
pub use function_call_response::FunctionCallResponseFrame;
pub use negotiate_protocol_version::NegotiateProtocolVersionFrame;
pub use no_data::NoDataFrame;
pub use notice_response::NoticeResponseFrame;
pub use notification_response::NotificationResponseFrame;
pub use parameter_description::ParameterDescriptionFrame;
pub use parameter_status::ParameterStatusFrame;
pub use parse_complete::ParseCompleteFrame;
pub use portal_suspended::PortalSuspendedFrame;
pub use ready_for_query::ReadyForQueryFrame;
pub use response_fields::{ErrorField, ResponseFields};
pub use row_description::{FieldDescription, RowDescriptionFrame};
