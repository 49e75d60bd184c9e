//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Indentation of diagram and binding lines inside a layer node.
pub const LAYER_INDENT: &str = "            ";

/// A 38-key QWERTY base layer with home row mods.
pub const BASE_BINDINGS: &str = "\
&kp Q        &kp W        &kp E         &kp R         &kp T    &kp Y    &kp U         &kp I         &kp O        &kp P
&mt LGUI A   &mt LALT S   &mt LCTRL D   &mt LSHFT F   &kp G    &kp H    &mt RSHFT J   &mt RCTRL K   &mt RALT L   &mt RGUI SEMI
&kp TAB      &kp Z        &kp X         &kp C         &kp V    &kp B    &kp N         &kp M         &kp COMMA    &kp DOT    &kp FSLH    &kp RA(A)
&kp ESC   &lt 1 SPACE   &kp TAB      &kp RET   &lt 2 BSPC   &kp DEL";

/// Navigation layer mixing transparent keys, layer switches and Bluetooth.
pub const NAV_BINDINGS: &str = "\
&bt BT_SEL 0   &bt BT_SEL 1   &bt BT_CLR   &out OUT_TOG   &trans   &kp PG_UP   &kp HOME   &kp UP     &kp END     &kp DEL
&kp LGUI       &kp LALT       &kp LCTRL    &kp LSHFT      &trans   &kp PG_DN   &kp LEFT   &kp DOWN   &kp RIGHT   &kp BSPC
&sys_reset &trans &trans &trans &trans &trans &trans &trans &trans &trans &trans &bootloader
&trans   &mo 3   &trans   &trans   &trans   &trans";

/// Symbol layer; shorter than a full layout on purpose.
pub const SYM_BINDINGS: &str = "\
&kp EXCL &kp AT &kp HASH &kp DLLR &kp PRCNT &kp CARET &kp AMPS &kp STAR &kp LPAR &kp RPAR";

/// A stale diagram whose thumb rows trail the end marker.
pub fn stale_diagram(indent: &str) -> String {
    [
        "// ┏━━━━━━━━━━━┳━━━━━━━━━━━┳━━━━━━━━━━━┓",
        "// ┃   STALE   ┃   STALE   ┃   STALE   ┃",
        "// ┗━━━━━━━━━━━┻━━━━━━━━━━━┻━━━━━━━━━━━┛",
        "//             ┃   STALE   ┃",
        "//             ┗━━━━━━━━━━━┛",
    ]
    .iter()
    .map(|line| format!("{indent}{line}\n"))
    .collect()
}

/// One `<name> { ... };` layer node.
pub fn layer_node(name: &str, diagram: &str, bindings: &str) -> String {
    let bindings: String = bindings
        .lines()
        .map(|line| format!("{LAYER_INDENT}    {line}\n"))
        .collect();

    format!(
        "        {name} {{\n{LAYER_INDENT}label = \"{name}\";\n{diagram}{LAYER_INDENT}bindings = <\n{bindings}{LAYER_INDENT}>;\n        }};\n\n"
    )
}

/// A full keymap file around the given layer nodes.
pub fn keymap_with_layers(layers: &[String]) -> String {
    format!(
        "#include <behaviors.dtsi>\n#include <dt-bindings/zmk/keys.h>\n#include <dt-bindings/zmk/bt.h>\n\n/ {{\n    keymap {{\n        compatible = \"zmk,keymap\";\n\n{}    }};\n}};\n",
        layers.concat()
    )
}

/// Keymap with two stale diagrams (base, nav) and a layer without one (sym).
pub fn sample_keymap() -> String {
    keymap_with_layers(&[
        layer_node("base_layer", &stale_diagram(LAYER_INDENT), BASE_BINDINGS),
        layer_node("nav_layer", &stale_diagram(LAYER_INDENT), NAV_BINDINGS),
        layer_node("sym_layer", "", SYM_BINDINGS),
    ])
}

/// Writes a keymap into a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn create_temp_keymap_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let keymap_path = temp_dir.path().join("corne.keymap");
    fs::write(&keymap_path, content).expect("Failed to write keymap file");
    (keymap_path, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_keymap_layers() {
        let keymap = sample_keymap();
        assert!(keymap.contains("base_layer {"));
        assert!(keymap.contains("nav_layer {"));
        assert!(keymap.contains("sym_layer {"));
        assert_eq!(keymap.matches("STALE").count(), 8);
    }

    #[test]
    fn test_base_bindings_count() {
        assert_eq!(BASE_BINDINGS.matches('&').count(), 38);
        assert_eq!(NAV_BINDINGS.matches('&').count(), 38);
    }
}
