/*!
 * # captionkeys
 *
 * Front-end plumbing for a browser-style video editor, usable headless.
 *
 * ## Features
 *
 * - Keyboard shortcut table for the editor (play/pause, split, delete,
 *   select all, zoom, undo/redo, nudging, frame stepping)
 * - Owned hotkey registry whose bindings are scoped to a component's lifetime
 * - Width-based grouping of transcript words into caption lines
 * - Caption payload fetching and SRT export
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `hotkeys`: Key combinations, registry, editor collaborators and actions:
 *   - `hotkeys::keys`: Combination parsing and key events
 *   - `hotkeys::registry`: Binding table and RAII scope
 *   - `hotkeys::context`: Traits for the editor engine, playback and timeline
 *   - `hotkeys::actions`: The action table and handler logic
 * - `captions`: Caption layout:
 *   - `captions::packer`: Greedy line packing
 *   - `captions::measure`: Text measurement surfaces
 *   - `captions::fetch`: HTTP loading of caption payloads
 *   - `captions::export`: SRT output
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod captions;
pub mod errors;
pub mod hotkeys;

// Re-export main types for easier usage
pub use app_config::Config;
pub use captions::{pack_words, CaptionFetcher, CaptionLayout, CaptionLine, TimedWord};
pub use errors::{AppError, CaptionError, HotkeyError};
pub use hotkeys::{EditorContext, EditorHotkeys, HotkeyRegistry, HotkeyScope};
