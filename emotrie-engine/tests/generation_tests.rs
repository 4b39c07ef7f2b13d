//! End-to-end generation tests against small emoji-test tables

use emotrie_engine::{
    Dialect, EngineConfig, ExecutionMode, Input, PatternGenerator, PatternGeneratorBuilder,
    UnicodeStyle, Vintage,
};
use regex::Regex;

const V12_TABLE: &str = "\
# emoji-test.txt
# Version: 12.0

# group: Smileys & Emotion
1F600                                      ; fully-qualified     # 😀 grinning face
263A FE0F                                  ; fully-qualified     # ☺️ smiling face
263A                                       ; unqualified         # ☺ smiling face

# group: People & Body
1F44B                                      ; fully-qualified     # 👋 waving hand
1F44B 1F3FB                                ; fully-qualified     # 👋🏻 waving hand: light skin tone
1F44B 1F3FC                                ; fully-qualified     # 👋🏼 waving hand: medium-light skin tone
1F441 FE0F 200D 1F5E8 FE0F                 ; fully-qualified     # 👁️‍🗨️ eye in speech bubble
1F441 200D 1F5E8 FE0F                      ; unqualified         # 👁‍🗨️ eye in speech bubble
1F441 FE0F 200D 1F5E8                      ; minimally-qualified # 👁️‍🗨 eye in speech bubble

# subgroup: skin-tone
1F3FB                                      ; component           # 🏻 light skin tone
1F3FC                                      ; component           # 🏼 medium-light skin tone

# group: Symbols
0023 FE0F 20E3                             ; fully-qualified     # #️⃣ keycap: #
0023 20E3                                  ; unqualified         # #⃣ keycap: #
002A FE0F 20E3                             ; fully-qualified     # *️⃣ keycap: *
002A 20E3                                  ; unqualified         # *⃣ keycap: *
";

const V11_TABLE: &str = "\
# Version: 11.0
1F600        ; fully-qualified     # 😀 grinning face
263A FE0F    ; fully-qualified     # ☺️ smiling face
263A         ; non-fully-qualified # ☺ smiling face
0023 FE0F 20E3 ; fully-qualified   # #️⃣ keycap: #
0023 20E3    ; non-fully-qualified # #⃣ keycap: #
";

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^{pattern}$")).unwrap()
}

fn hex(codes: &str) -> String {
    codes
        .split_whitespace()
        .map(|h| char::from_u32(u32::from_str_radix(h, 16).unwrap()).unwrap())
        .collect()
}

#[test]
fn test_v12_categories_accept_their_members() {
    let generator = PatternGenerator::new();
    let output = generator.generate_text(V12_TABLE).unwrap();
    assert_eq!(output.summary.vintage, Vintage::V12);
    assert_eq!(output.summary.version.as_deref(), Some("12.0"));
    assert_eq!(output.summary.literals, 15);

    let members = generator.members(V12_TABLE).unwrap();
    assert_eq!(members.len(), output.patterns.len());
    for (key, set) in &members {
        let re = anchored(output.patterns.get(key).unwrap());
        for literal in set.iter() {
            let text = literal.to_text().unwrap();
            assert!(re.is_match(&text), "{key} rejects {literal}");
        }
    }
}

#[test]
fn test_v12_keycap_round_trip() {
    let output = PatternGenerator::new().generate_text(V12_TABLE).unwrap();
    let keyboard = anchored(output.patterns.get("Keyboard").unwrap());
    let display = anchored(output.patterns.get("Display").unwrap());
    let all = anchored(output.patterns.get("All").unwrap());

    let qualified = hex("0023 FE0F 20E3");
    let bare = hex("0023 20E3");

    assert!(keyboard.is_match(&qualified));
    assert!(!keyboard.is_match(&bare));
    assert!(display.is_match(&bare));
    assert!(!display.is_match(&qualified));
    assert!(all.is_match(&qualified) && all.is_match(&bare));
    assert!(!all.is_match("#"));
}

#[test]
fn test_component_category() {
    let output = PatternGenerator::new().generate_text(V12_TABLE).unwrap();
    let component = output.patterns.get("Component").unwrap();
    assert_eq!(component, "(?:[\u{1F3FB}\u{1F3FC}])");
}

#[test]
fn test_longest_sequence_wins_in_search() {
    let output = PatternGenerator::new().generate_text(V12_TABLE).unwrap();
    let all = Regex::new(output.patterns.get("All").unwrap()).unwrap();

    let text = format!("hi {} there", hex("1F44B 1F3FC"));
    let found = all.find(&text).unwrap();
    assert_eq!(found.as_str(), hex("1F44B 1F3FC"));

    let text = hex("1F441 FE0F 200D 1F5E8 FE0F");
    assert_eq!(all.find(&text).unwrap().as_str(), text);
}

#[test]
fn test_v11_table() {
    let output = PatternGenerator::new().generate_text(V11_TABLE).unwrap();
    assert_eq!(output.summary.vintage, Vintage::V11);

    let names: Vec<_> = output.patterns.names().collect();
    assert_eq!(names, vec!["All", "Keyboard"]);

    let keyboard = anchored(output.patterns.get("Keyboard").unwrap());
    assert!(keyboard.is_match(&hex("263A FE0F")));
    assert!(!keyboard.is_match(&hex("263A")));
    assert!(keyboard.is_match(&hex("0023 FE0F 20E3")));
}

#[test]
fn test_forcing_v12_on_v11_table_fails_with_line() {
    let generator = PatternGeneratorBuilder::new()
        .vintage(Some(Vintage::V12))
        .build()
        .unwrap();
    let err = generator.generate_text(V11_TABLE).unwrap_err();
    assert!(err.to_string().starts_with("line 4:"), "{err}");
}

#[test]
fn test_javascript_preset() {
    let generator = PatternGenerator::with_config(EngineConfig::javascript()).unwrap();
    let output = generator.generate_text(V11_TABLE).unwrap();

    let names: Vec<_> = output.patterns.names().collect();
    assert_eq!(names, vec!["Emoji_Test_All", "Emoji_Test_Keyboard"]);
    // `#` is not a metacharacter in ECMAScript
    assert!(output
        .patterns
        .get("Emoji_Test_All")
        .unwrap()
        .contains("#\u{FE0F}?\u{20E3}"));
}

#[test]
fn test_escaped_output_is_ascii() {
    let generator = PatternGeneratorBuilder::new()
        .dialect(Dialect::Rust)
        .unicode(UnicodeStyle::Escaped)
        .build()
        .unwrap();
    let output = generator.generate_text(V12_TABLE).unwrap();

    for (key, pattern) in output.patterns.iter() {
        assert!(pattern.is_ascii(), "{key}: {pattern}");
    }
    let all = anchored(output.patterns.get("All").unwrap());
    assert!(all.is_match(&hex("1F44B 1F3FB")));
}

#[test]
fn test_execution_modes_agree() {
    let sequential = PatternGeneratorBuilder::new()
        .execution_mode(ExecutionMode::Sequential)
        .build()
        .unwrap()
        .generate_text(V12_TABLE)
        .unwrap();
    let parallel = PatternGeneratorBuilder::new()
        .execution_mode(ExecutionMode::Parallel)
        .threads(Some(2))
        .build()
        .unwrap()
        .generate_text(V12_TABLE)
        .unwrap();

    assert_eq!(sequential.patterns, parallel.patterns);
    assert_eq!(sequential.metadata.execution_mode, ExecutionMode::Sequential);

    // the recorded mode is the one the executor reports, which falls back
    // to sequential when parallel support is compiled out
    let expected = if cfg!(feature = "parallel") {
        ExecutionMode::Parallel
    } else {
        ExecutionMode::Sequential
    };
    assert_eq!(parallel.metadata.execution_mode, expected);
}

#[test]
fn test_adaptive_small_table_runs_sequentially() {
    let output = PatternGenerator::new().generate_text(V12_TABLE).unwrap();
    assert_eq!(output.metadata.execution_mode, ExecutionMode::Sequential);
}

#[test]
fn test_line_order_does_not_change_patterns() {
    let mut lines: Vec<&str> = V12_TABLE.lines().collect();
    lines.reverse();
    let reversed = lines.join("\n");

    let forward = PatternGenerator::new().generate_text(V12_TABLE).unwrap();
    let backward = PatternGenerator::new().generate_text(&reversed).unwrap();
    assert_eq!(forward.patterns, backward.patterns);
}

#[test]
fn test_generate_from_bytes_and_file() {
    let from_bytes = PatternGenerator::new()
        .generate(Input::from_bytes(V11_TABLE.as_bytes().to_vec()))
        .unwrap();

    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), V11_TABLE).unwrap();
    let from_file = PatternGenerator::new()
        .generate(Input::from_file(file.path()))
        .unwrap();

    assert_eq!(from_bytes.patterns, from_file.patterns);
}
