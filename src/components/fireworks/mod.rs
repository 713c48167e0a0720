//! Interactive fireworks on an HTML canvas.
//!
//! A pointer press launches a [`Firework`] from the bottom edge of the canvas
//! toward the pressed point. It eases upward until it reaches its target, then
//! bursts into evenly spaced [`Particle`]s that slow down, fall and fade out.
//!
//! The simulation itself (`Firework`, `Particle`, [`Display`]) knows nothing
//! about the browser: it draws through the [`Surface`] trait and takes its
//! randomness from an injected [`rand::Rng`], so it runs the same in native
//! tests as it does in the WASM build.
//!
//! # Example
//!
//! ```ignore
//! use fireworks_canvas::{FireworksCanvas, SimulationConfig};
//!
//! view! { <FireworksCanvas config=SimulationConfig::default() fullscreen=true /> }
//! ```

mod component;
pub mod config;
mod display;
mod firework;
pub mod math;
mod particle;
pub mod render;
mod state;
pub mod theme;

pub use component::FireworksCanvas;
pub use config::{ConfigError, SimulationConfig, Span};
pub use display::{Display, EntityId};
pub use firework::{Charge, Firework};
pub use particle::Particle;
pub use render::{CanvasSurface, Surface};
pub use state::FireworksState;
pub use theme::{ColorError, Hsla};
