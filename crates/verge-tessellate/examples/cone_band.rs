//! Tessellate a cone band with mismatched rims and print the face loops.

use anyhow::Result;
use verge_tessellate::{max_chord_error, tessellate_band, BandOptions, RevolvedSurface};

fn main() -> Result<()> {
    let cone = RevolvedSurface::Cone {
        base_radius: 20.0,
        top_radius: 5.0,
        height: 30.0,
    };
    let options = BandOptions::default()
        .with_segments(24, 10)
        .with_chord_tolerance(0.25)
        .with_max_refine_passes(6);

    let band = tessellate_band(&cone, &options)?;
    println!("{}", band.graph.dump_face_loops()?);
    println!(
        "rims {} + {}, struts {}, splits per pass {:?}, max chord error {:.4}",
        band.rim_a_len,
        band.rim_b_len,
        band.struts_added,
        band.splits_per_pass,
        max_chord_error(&band.graph, &cone)
    );
    Ok(())
}
