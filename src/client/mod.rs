pub mod store;
pub mod store_client;

pub use store::RoomStore;
pub use store_client::StoreClient;
