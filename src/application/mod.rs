// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (one use case per core operation).
//
// Rules for this layer:
//   - No segmentation algorithms here (that's Layer 4)
//   - No UI or printing here (that's Layer 1)
//   - No annotation internals (that's Layer 3 and 6)
//   - Only workflow coordination and response assembly
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Segment a text into flashcard-sized chunks
pub mod segment_use_case;

// Full linguistic enrichment of a text
pub mod enhance_use_case;

// Quality checks over a batch of flashcards
pub mod validate_use_case;

// Fill-in-the-blank exercise generation
pub mod cloze_use_case;
