#![allow(dead_code)]

use serde_json::json;
use tessera_codegen::ir::Surface;
use tessera_codegen::settings::SurfaceSettings;
use tessera_model::{Model, ShapeId};

pub fn id(raw: &str) -> ShapeId {
    ShapeId::parse(raw).expect("valid shape id")
}

pub fn weather_model() -> Model {
    Model::from_json_str(include_str!("../fixtures/weather.json")).expect("weather model loads")
}

pub fn weather_settings() -> SurfaceSettings {
    SurfaceSettings::new(id("example.weather#Weather"))
}

/// One operation without input or output, no errors.
pub fn ping_model() -> Model {
    Model::from_json_value(json!({
        "smithy": "2.0",
        "shapes": {
            "example.ping#Pinger": {
                "type": "service",
                "operations": [{ "target": "example.ping#Ping" }]
            },
            "example.ping#Ping": { "type": "operation" }
        }
    }))
    .expect("ping model loads")
}

pub fn ping_settings() -> SurfaceSettings {
    SurfaceSettings::new(id("example.ping#Pinger"))
}

pub fn identifiers(surface: &Surface) -> Vec<String> {
    surface.identifiers().map(String::from).collect()
}
