use wasm_bindgen::prelude::*;

mod field;
use field::TetraRing;

ringfield_web::export_field!(TetraRing, "tetra-ring");
