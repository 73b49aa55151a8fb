#![allow(dead_code)]

use serde_json::{json, Value};
use tessera_model::{Model, ShapeId};

pub fn id(raw: &str) -> ShapeId {
    ShapeId::parse(raw).expect("valid shape id")
}

pub fn weather_service() -> ShapeId {
    id("example.weather#Weather")
}

/// A small weather service exercising resources, errors, enums, waiters and paginators.
pub fn weather_json() -> Value {
    json!({
        "smithy": "2.0",
        "shapes": {
            "example.weather#Weather": {
                "type": "service",
                "version": "2006-03-01",
                "operations": [{ "target": "example.weather#GetCurrentTime" }],
                "resources": [{ "target": "example.weather#City" }],
                "errors": [{ "target": "example.weather#ServiceUnavailable" }]
            },
            "example.weather#City": {
                "type": "resource",
                "identifiers": { "cityId": { "target": "example.weather#CityId" } },
                "read": { "target": "example.weather#GetCity" },
                "list": { "target": "example.weather#ListCities" },
                "resources": [{ "target": "example.weather#Forecast" }]
            },
            "example.weather#Forecast": {
                "type": "resource",
                "read": { "target": "example.weather#GetForecast" }
            },
            "example.weather#GetCurrentTime": {
                "type": "operation",
                "input": { "target": "smithy.api#Unit" },
                "output": { "target": "example.weather#GetCurrentTimeOutput" }
            },
            "example.weather#GetCurrentTimeOutput": {
                "type": "structure",
                "members": { "time": { "target": "smithy.api#Timestamp" } }
            },
            "example.weather#GetCity": {
                "type": "operation",
                "input": { "target": "example.weather#GetCityInput" },
                "output": { "target": "example.weather#GetCityOutput" },
                "errors": [{ "target": "example.weather#NoSuchResource" }],
                "traits": {
                    "smithy.waiters#waitable": {
                        "CityExists": { "acceptors": [] }
                    }
                }
            },
            "example.weather#GetCityInput": {
                "type": "structure",
                "members": { "cityId": { "target": "example.weather#CityId" } }
            },
            "example.weather#GetCityOutput": {
                "type": "structure",
                "members": {
                    "name": { "target": "smithy.api#String" },
                    "coordinates": { "target": "example.weather#CityCoordinates" },
                    "unit": { "target": "example.weather#LegacyUnit" },
                    "season": { "target": "example.weather#Season" }
                }
            },
            "example.weather#CityCoordinates": {
                "type": "structure",
                "members": {
                    "latitude": { "target": "smithy.api#Float" },
                    "longitude": { "target": "smithy.api#Float" }
                }
            },
            "example.weather#CityId": {
                "type": "string",
                "traits": { "smithy.api#pattern": "^[A-Za-z0-9 ]+$" }
            },
            "example.weather#LegacyUnit": {
                "type": "string",
                "traits": {
                    "smithy.api#enum": [{ "value": "C" }, { "value": "F" }]
                }
            },
            "example.weather#Season": {
                "type": "string",
                "traits": {
                    "smithy.api#enum": [
                        { "value": "summer", "name": "SUMMER" },
                        { "value": "winter", "name": "WINTER" }
                    ]
                }
            },
            "example.weather#ListCities": {
                "type": "operation",
                "input": { "target": "example.weather#ListCitiesInput" },
                "output": { "target": "example.weather#ListCitiesOutput" },
                "traits": {
                    "smithy.api#paginated": {
                        "inputToken": "nextToken",
                        "outputToken": "nextToken",
                        "items": "items"
                    }
                }
            },
            "example.weather#ListCitiesInput": {
                "type": "structure",
                "members": { "nextToken": { "target": "smithy.api#String" } }
            },
            "example.weather#ListCitiesOutput": {
                "type": "structure",
                "members": {
                    "nextToken": { "target": "smithy.api#String" },
                    "items": { "target": "example.weather#CitySummaries" }
                }
            },
            "example.weather#CitySummaries": {
                "type": "list",
                "member": { "target": "example.weather#CitySummary" }
            },
            "example.weather#CitySummary": {
                "type": "structure",
                "members": {
                    "cityId": { "target": "example.weather#CityId" },
                    "kind": { "target": "example.weather#CityKind" },
                    "tags": { "target": "example.weather#Tags" }
                }
            },
            "example.weather#CityKind": {
                "type": "enum",
                "members": {
                    "CAPITAL": { "target": "smithy.api#Unit" },
                    "TOWN": { "target": "smithy.api#Unit" }
                }
            },
            "example.weather#Tags": {
                "type": "map",
                "key": { "target": "smithy.api#String" },
                "value": { "target": "example.weather#Tag" }
            },
            "example.weather#Tag": {
                "type": "structure",
                "members": { "priority": { "target": "example.weather#Priority" } }
            },
            "example.weather#Priority": {
                "type": "intEnum",
                "members": {
                    "LOW": { "target": "smithy.api#Unit", "traits": { "smithy.api#enumValue": 1 } },
                    "HIGH": { "target": "smithy.api#Unit", "traits": { "smithy.api#enumValue": 2 } }
                }
            },
            "example.weather#GetForecast": {
                "type": "operation",
                "input": { "target": "example.weather#GetForecastInput" },
                "output": { "target": "example.weather#GetForecastOutput" },
                "errors": [{ "target": "example.weather#NoSuchResource" }]
            },
            "example.weather#GetForecastInput": {
                "type": "structure",
                "members": { "cityId": { "target": "example.weather#CityId" } }
            },
            "example.weather#GetForecastOutput": {
                "type": "structure",
                "members": {
                    "chanceOfRain": { "target": "smithy.api#Float" },
                    "precipitation": { "target": "example.weather#Precipitation" }
                }
            },
            "example.weather#Precipitation": {
                "type": "union",
                "members": {
                    "rain": { "target": "smithy.api#Boolean" },
                    "other": { "target": "example.weather#OtherPrecipitation" }
                }
            },
            "example.weather#OtherPrecipitation": {
                "type": "structure",
                "members": { "description": { "target": "smithy.api#String" } }
            },
            "example.weather#NoSuchResource": {
                "type": "structure",
                "members": { "resourceType": { "target": "smithy.api#String" } },
                "traits": { "smithy.api#error": "client" }
            },
            "example.weather#ServiceUnavailable": {
                "type": "structure",
                "traits": { "smithy.api#error": "server" }
            },
            "example.weather#Unreferenced": {
                "type": "structure",
                "traits": { "smithy.api#error": "client" }
            }
        }
    })
}

pub fn weather_model() -> Model {
    Model::from_json_value(weather_json()).expect("weather model loads")
}
