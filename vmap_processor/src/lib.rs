//! # VMAP Processor: Streaming Parser and Generator for VMAP Ad-Break Documents
//!
//! This crate turns VMAP documents (with their embedded VAST responses) into the
//! typed tree from `vmap_core`, and writes that tree back out as XML. The two
//! embedded scalar formats, clock durations and polymorphic time offsets, are
//! decoded and encoded through `vmap_core::ScalarCodec`.
//!
//! - [`parse_vmap`]: Converts a VMAP string into `ParsedVmapData`.
//! - [`generate_vmap`]: Creates a VMAP string from a `Vmap` document.
//!
//! Only the fields of the schema that `vmap_core` models are kept. Unknown
//! elements and attributes are skipped, and no schema validation (break ordering,
//! id references) is performed.
//!
//! ## Examples
//!
//! ```rust
//! use vmap_core::{Anchor, TimeOffset, VmapGenerationOptions, VmapParsingOptions};
//! use vmap_processor::{generate_vmap, parse_vmap};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let content = r#"
//!     <vmap:VMAP xmlns:vmap="http://www.iab.net/videosuite/vmap" version="1.0">
//!       <vmap:AdBreak timeOffset="start" breakType="linear" breakId="preroll">
//!         <vmap:AdSource>
//!           <vmap:VASTAdData>
//!             <VAST version="3.0">
//!               <Ad id="a1" sequence="1">
//!                 <InLine>
//!                   <AdSystem>Example</AdSystem>
//!                   <Creatives>
//!                     <Creative id="c1">
//!                       <Linear><Duration>00:00:15</Duration></Linear>
//!                     </Creative>
//!                   </Creatives>
//!                 </InLine>
//!               </Ad>
//!             </VAST>
//!           </vmap:VASTAdData>
//!         </vmap:AdSource>
//!       </vmap:AdBreak>
//!     </vmap:VMAP>
//!     "#;
//!
//!     let parsed = parse_vmap(content, &VmapParsingOptions::default())?;
//!     let ad_break = &parsed.document.ad_breaks[0];
//!     assert_eq!(ad_break.time_offset, Some(TimeOffset::NamedAnchor(Anchor::Start)));
//!
//!     let generated = generate_vmap(&parsed.document, &VmapGenerationOptions::default())?;
//!     // Named anchors are written back as their sentinel positions.
//!     assert!(generated.contains(r##"timeOffset="#-1""##));
//!     assert!(generated.contains("<Duration>00:00:15</Duration>"));
//!
//!     Ok(())
//! }
//! ```

pub mod generator;
pub mod parser;

pub use generator::generate_vmap;
pub use parser::parse_vmap;
