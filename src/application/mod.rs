mod config;
mod conway;
mod ticker;

pub use config::{ConfigError, LifeConfig};
pub use conway::Conway;
pub use ticker::{FrameLimit, Ticker, Unpaced};
