#![cfg(target_arch = "wasm32")]

use markets_wasm::{init_dataset, market_count, query};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const DATASET: &str = r#"[
    {"_":"a","t":"Halles","c":[5,5],"a":"Rue","p":12000,"ci":"Rodez","h":{"samedi":"8h-12h"}},
    {"_":"b","t":"Foirail","c":[20,20],"a":"Rue","p":81000,"ci":"Albi","h":{}},
    {"_":"c","t":"Place","c":[1,1],"a":"Rue","p":12200,"ci":"Villefranche","h":{}}
]"#;

#[wasm_bindgen_test]
fn loads_dataset_once() {
    assert_eq!(init_dataset(DATASET).unwrap(), 3);
    assert_eq!(market_count(), 3);
}

#[wasm_bindgen_test]
fn query_returns_plain_objects_inside_bounds() {
    init_dataset(DATASET).unwrap();

    let excluded = js_sys::Array::new();
    excluded.push(&JsValue::from_str("c"));
    let found = query(0.0, 0.0, 10.0, 10.0, &excluded, None).unwrap();

    let found = js_sys::Array::from(&found);
    assert_eq!(found.length(), 1);
    let first = found.get(0);
    let id = js_sys::Reflect::get(&first, &JsValue::from_str("id")).unwrap();
    assert_eq!(id.as_string().as_deref(), Some("a"));
    let hours = js_sys::Reflect::get(&first, &JsValue::from_str("hours")).unwrap();
    let samedi = js_sys::Reflect::get(&hours, &JsValue::from_str("samedi")).unwrap();
    assert_eq!(samedi.as_string().as_deref(), Some("8h-12h"));
}
