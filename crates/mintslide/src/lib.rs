//! Touch and mouse draggable paginated slider
//!
//! This crate provides the engine of a slider (carousel) widget:
//! - Page state with clamped commits and ordered notifications
//! - Gesture interpretation (edge resistance, flick detection, incomplete swipes)
//! - Strip positioning via CSS transitions or a timer-driven ease-out fallback
//! - Layout of slides into pages from the container width
//! - Slideshow, page indicators and focus sync
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`)
//! - [`capability`]: One-shot transform/transition feature probe
//! - [`position`]: Position driver and fallback animation
//! - [`layout`]: Slider geometry and the layout manager
//! - [`gesture`]: Drag state, resistance and release classification
//! - [`config`]: Options and their defaults
//! - [`event`]: Notifications drained by the embedder
//!
//! Every environment primitive goes through the `Host` trait from
//! `mintslide-host`, so the whole engine runs against `mintslide-host-mock`
//! in tests.
//!
//! ## Example
//!
//! ```rust
//! use mintslide::{Slider, SliderEvent, SliderOptions, SlideWidth, Vec2};
//! use mintslide_host_mock::MockHost;
//!
//! let host = MockHost::new(5, 300.0).with_accelerated();
//! let options = SliderOptions {
//!     slide_width: SlideWidth::Full,
//!     ..Default::default()
//! };
//! let mut slider = Slider::setup(host, options).unwrap().unwrap();
//!
//! slider.drag_start(Vec2::new(200.0, 40.0), false);
//! slider.drag_move(Vec2::new(-50.0, 0.0));
//! assert_eq!(slider.drag_end(Vec2::new(-50.0, 0.0), 150.0), Some(1));
//!
//! let events = slider.take_events();
//! assert!(events.contains(&SliderEvent::PageChange { page: 1 }));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Animations read time and timers from the host
//! 3. **Single Commit Path**: Every page change goes through one routine
//! 4. **Minimal Dependencies**: Core types have no browser dependencies

pub mod capability;
pub mod config;
pub mod event;
pub mod gesture;
pub mod layout;
pub mod math;
pub mod position;

mod engine;
mod error;
mod page;
mod slideshow;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use capability::Capabilities;
pub use config::{ClassNames, SlideWidth, SliderOptions};
pub use engine::Slider;
pub use error::SliderError;
pub use event::SliderEvent;
pub use gesture::{DragSample, DragState, GestureOutcome};
pub use layout::SliderGeometry;
pub use math::{Size, Vec2};
pub use page::PageState;
pub use position::Strategy;
pub use slideshow::Slideshow;

pub use mintslide_host::{Host, HostError, Node, TimerId};
