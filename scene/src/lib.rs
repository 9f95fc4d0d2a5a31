//! Scene-editing engine for facility-layout diagrams.
//!
//! The engine owns everything between raw input events and draw primitives:
//! the ordered shape collection, the undo/redo history, the relative-placement
//! rules for dropped palette elements, the pointer-gesture state machine and
//! the per-field attribute edits issued by a property panel. It has no UI
//! framework dependency; the host wires its input events to
//! [`engine::EngineCore`] and repaints from [`render::project`] whenever an
//! [`engine::Action::RenderNeeded`] comes back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Session object [`engine::EngineCore`] and event entry points |
//! | [`doc`] | Shape kinds, templates, placed shapes and the ordered [`doc::SceneStore`] |
//! | [`history`] | Snapshot-based undo/redo stacks |
//! | [`placement`] | Drop positioning and relative-placement rules |
//! | [`input`] | Modifier keys, gesture kinds and the gesture state machine |
//! | [`edit`] | Closed set of single-field attribute edits |
//! | [`geometry`] | Angles, distances, proportional resize, rotation snapping |
//! | [`viewport`] | Canvas origin and size, client-to-canvas conversion |
//! | [`render`] | Pure projection of the scene into draw primitives |
//! | [`config`] | Tunable editor behaviour |
//! | [`consts`] | Shared numeric constants |
//! | [`error`] | Engine error type |

pub mod config;
pub mod consts;
pub mod doc;
pub mod edit;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod history;
pub mod input;
pub mod placement;
pub mod render;
pub mod viewport;
