//! Classification of ICAO flight plan route strings.
//!
//! A route string such as `N0450F350 UL607 DOVER UL9 50N020W DCT WPT1` is
//! split on whitespace and every token becomes a typed [`RouteElement`]:
//!
//! ```
//! use route_parser::{ElementKind, Route};
//!
//! let route = Route::build("N0450F350 DCT WPT1").unwrap();
//! assert_eq!(
//!     route.kinds(),
//!     vec![ElementKind::SpeedLevel, ElementKind::Direct, ElementKind::NamedPoint]
//! );
//! ```

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod grammar;
pub mod resolve;
pub mod route;
pub mod units;

pub use element::{ElementKind, RouteElement, SignificantPoint, SpeedLevel};
pub use error::{Error, Result};
pub use resolve::resolve;
pub use route::Route;
pub use units::{FlightRule, LevelUnit, SpeedUnit};
