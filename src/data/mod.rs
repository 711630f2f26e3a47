//! Input data for plots
//!
//! A plot consumes an ordered collection of [`Series`]. Each series is one
//! visual trace: a pair of x and y sequences of equal length. Series carry no
//! identity beyond their position in the collection; colours and labels are
//! matched to them by index.
//!
//! # Example
//!
//! ```rust
//! use plotkit::data::{Series, validate_series};
//!
//! let rising = Series::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]).unwrap();
//! let falling = Series::from_points(&[(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)]);
//!
//! validate_series(&[rising, falling]).unwrap();
//! ```

pub mod series;

pub use series::{validate_series, Series};
