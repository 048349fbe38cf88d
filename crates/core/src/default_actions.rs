//! The action table compiled into the binary.
//!
//! Used when no action file is configured. Every entry runs one of the tool
//! scripts through `{interpreter}` with no further arguments; the scripts
//! prompt for their own inputs.

use crate::action_definitions::ActionDefinition;

/// Label of the built-in quit entry.
pub const QUIT_LABEL: &str = "Quit";

/// (label, script file name) for every built-in tool, in menu order.
const TOOL_SCRIPTS: &[(&str, &str)] = &[
    ("Convert to Opus", "convert-to-opus.py"),
    ("Convert to MP3", "convert-to-mp3.py"),
    ("Convert to FLAC", "convert-to-flac.py"),
    ("Change Volume", "change-volume.py"),
    ("Split Lossless Album (CUE)", "lossless-separator.py"),
    ("Detect Sample Rate", "sample-rate-detector.py"),
    ("Edit Metadata", "edit-metadata.py"),
    ("Remove Audio", "remove-audio.py"),
    // Runs the metadata stripper; the label is kept as shipped.
    ("Remove Audio", "remove-metadata.py"),
    ("Rotate Video", "rotate-video.py"),
    ("Crop Images", "crop-images.py"),
    ("Scale Images", "scale-images.py"),
    ("Convert Images to WebP", "convert-to-webp.py"),
    ("Sort by Artist", "sort-by-artist.py"),
    ("Sort by Genre", "sort-by-genre.py"),
    ("Sort by Resolution", "sort-by-resolution.py"),
];

/// Returns the built-in action definitions, ending with the quit entry.
pub fn default_action_definitions() -> Vec<ActionDefinition> {
    TOOL_SCRIPTS
        .iter()
        .map(|(label, script)| {
            let script_path = format!("{{tools_dir}}/{script}");
            ActionDefinition::program(label, &["{interpreter}", script_path.as_str()])
        })
        .chain(std::iter::once(ActionDefinition::quit(QUIT_LABEL)))
        .collect()
}
