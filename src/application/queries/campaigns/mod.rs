mod articles;
mod get_by_id;
mod list;
mod service;

pub use articles::ListCampaignArticlesQuery;
pub use get_by_id::GetCampaignQuery;
pub use list::ListCampaignsQuery;
pub use service::CampaignQueryService;
