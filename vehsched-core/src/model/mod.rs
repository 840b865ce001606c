mod calendar;
mod feed;
mod route;
mod stop;
mod stop_time;
mod trip;

pub use calendar::{Calendar, ServiceVariant, SECONDS_PER_DAY, WEEKDAYS};
pub use feed::Feed;
pub use route::{Route, TransportType, LAYER_DEFAULT, LAYER_UNDERGROUND};
pub use stop::{stop_directory, Stop, StopDirectory};
pub use stop_time::StopTime;
pub use trip::Trip;
