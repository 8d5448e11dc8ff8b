use emoji_kitchen::{codepoint_to_glyph, normalize, Dataset, EmojiKitchen};

const DATA: &str = r#"{
  "data": {
    "1f601": {
      "combinations": {
        "1f600": [
          {
            "leftEmoji": "😀",
            "leftEmojiCodepoint": "1f600",
            "rightEmoji": "😁",
            "rightEmojiCodepoint": "1f601",
            "alt": "grinning mix",
            "gStaticUrl": "https://www.gstatic.com/android/keyboard/emojikitchen/20201001/u1f600/u1f600_u1f601.png"
          }
        ]
      }
    }
  }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let kitchen = EmojiKitchen::new(Dataset::from_json_str(DATA)?);

    println!("🍳 Emoji Kitchen Demo\n");

    // The same emoji in each accepted notation
    for input in ["😁", "1F601", "u1f601"] {
        println!("├─ {:<8} -> {}", input, normalize(input));
    }
    println!();

    let right = normalize("😁");
    println!("📋 Combinations for {}:", codepoint_to_glyph(&right).unwrap_or_default());
    for combo in kitchen.list_combinations(&right) {
        println!("{}\n", combo);
    }

    println!("🔗 Looking up 😀 + 😁 ...");
    match kitchen.get_combo(&normalize("😀"), &right) {
        Some(combo) => println!("{}", serde_json::to_string_pretty(&combo)?),
        None => println!("No combination found"),
    }

    println!("\n🔁 Reversed (😁 + 😀) ...");
    if kitchen.get_combo(&right, &normalize("😀")).is_none() {
        println!("No combination found - lookups are keyed by the right-hand emoji");
    }

    Ok(())
}
