use wasm_bindgen::prelude::*;

mod bodies;
mod game;
mod orbit;
mod scene;
use game::JovianSystem;

orrery_web::export_game!(JovianSystem, "jovian-system", vectors);
