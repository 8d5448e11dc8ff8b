use wasm_bindgen::prelude::*;
use crate::{codepoint, Dataset, EmojiKitchen};

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Normalize a glyph, codepoint or escape token to a codepoint key
#[wasm_bindgen]
pub fn normalize(arg: &str) -> String {
    codepoint::normalize(arg)
}

#[wasm_bindgen]
pub struct WasmEmojiKitchen {
    kitchen: EmojiKitchen,
}

#[wasm_bindgen]
impl WasmEmojiKitchen {
    /// Build from the dataset document text (e.g. a fetched `emojikitchen.json`)
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<WasmEmojiKitchen, JsValue> {
        init_panic_hook();
        let dataset = Dataset::from_json_str(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmEmojiKitchen {
            kitchen: EmojiKitchen::new(dataset),
        })
    }

    /// Number of emoji in the dataset
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.kitchen.len()
    }

    /// All combinations of one emoji, as an array of plain objects
    #[wasm_bindgen(js_name = listCombinations)]
    pub fn list_combinations(&self, emoji: &str) -> Result<JsValue, JsValue> {
        let combos = self.kitchen.list_combinations(&codepoint::normalize(emoji));
        serde_wasm_bindgen::to_value(&combos).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The combination of `left` + `right`, or `null`
    #[wasm_bindgen(js_name = getCombo)]
    pub fn get_combo(&self, left: &str, right: &str) -> Result<JsValue, JsValue> {
        let combo = self
            .kitchen
            .get_combo(&codepoint::normalize(left), &codepoint::normalize(right));
        match combo {
            Some(combo) => serde_wasm_bindgen::to_value(&combo)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::NULL),
        }
    }

    /// Partner codepoints of an emoji as a JS array of strings
    #[wasm_bindgen]
    pub fn partners(&self, emoji: &str) -> js_sys::Array {
        self.kitchen
            .partners(&codepoint::normalize(emoji))
            .unwrap_or_default()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }
}
