//! Tour of the braid tracker.
//!
//! Shows:
//! 1. Strand tracking for a few classic words
//! 2. Rejection of generators that do not fit
//! 3. Compact vs extended layouts
//! 4. SVG export of a random braid

use braid_visualiser::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══ 1. Strand Tracking ═══");
    println!();
    let classics: [(&str, usize, &[i64]); 4] = [
        ("single crossing", 2, &[1]),
        ("full twist", 2, &[1, 1]),
        ("braid relation (lhs)", 3, &[1, 2, 1]),
        ("trefoil closure", 2, &[1, 1, 1]),
    ];
    for (name, n, word) in classics {
        let braid = Braid::new(n, word)?;
        println!("{} on {} strands", name, n);
        println!("{}", braid);
        println!(
            "  top {:?}  bottom {:?}  pure: {}",
            braid.top_labels(),
            braid.bottom_labels(),
            braid.tracking().is_pure()
        );
        println!();
    }

    println!("═══ 2. Validation ═══");
    println!();
    for (n, word) in [(3usize, vec![1i64, 3]), (4, vec![0]), (1, vec![])] {
        match Braid::new(n, &word) {
            Ok(b) => println!("{:?} on {} strands: ok ({})", word, n, b.len()),
            Err(e) => println!("{:?} on {} strands: {}", word, n, e),
        }
    }
    println!();

    println!("═══ 3. Layouts ═══");
    println!();
    let braid: Braid = "5: 1 3 -2 4 1 -3".parse()?;
    for style in [DrawStyle::Compact, DrawStyle::Extended] {
        let layout = Layout::new(braid.word(), style);
        println!("{:?}: rows {:?} (height {})", style, layout.rows(), layout.height());
    }
    println!();

    println!("═══ 4. SVG Export ═══");
    println!();
    let mut rng = StdRng::seed_from_u64(2024);
    let word = random_word(6, 24, &mut rng);
    let braid = Braid::new(6, &word)?;
    let path = std::env::temp_dir().join("random_braid.svg");
    save_svg(&braid, &DrawConfig::default(), &path)?;
    println!("{}", braid);
    println!("Saved to {}", path.display());

    Ok(())
}
