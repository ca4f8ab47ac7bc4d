/// Category service interface
pub mod category;
/// Channel service interface
pub mod channel;
/// Clip service interface
pub mod clip;
/// Emote service interface
pub mod emote;
/// Stream service interface
pub mod stream;
/// User service interface
pub mod user;
/// Vod service interface
pub mod vod;

pub use category::*;
pub use channel::*;
pub use clip::*;
pub use emote::*;
pub use stream::*;
pub use user::*;
pub use vod::*;
