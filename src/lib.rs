//! fireworks-canvas: click or tap anywhere to launch fireworks.
//!
//! This crate provides a WASM-based canvas component where each pointer press
//! launches a shell that climbs to the pressed point and bursts into fading,
//! falling sparks.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::fireworks::{
	Charge, ColorError, ConfigError, Display, EntityId, Firework, FireworksCanvas,
	FireworksState, Hsla, Particle, SimulationConfig, Span, Surface,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("fireworks: logging initialized");
}

/// Load tuning overrides from a script element with id="fireworks-config".
/// Expected format: a JSON object with any subset of [`SimulationConfig`] fields.
fn load_config() -> Option<SimulationConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("fireworks-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match SimulationConfig::from_json(&json_text) {
		Ok(config) => {
			info!("fireworks: loaded config overrides");
			Some(config)
		}
		Err(e) => {
			warn!("fireworks: ignoring config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads tuning from the DOM and renders a fullscreen fireworks canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Fireworks" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-fireworks">
			<FireworksCanvas config=config_signal fullscreen=true />
			<div class="fireworks-overlay">
				<p class="subtitle">"Click or tap anywhere to launch a firework."</p>
			</div>
		</div>
	}
}
