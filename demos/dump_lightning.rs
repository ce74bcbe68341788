use scenery::{LightningBranchConfig, LightningConfig, Point, generate_lightning_with_branches};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let base = LightningBranchConfig {
        bolt: LightningConfig {
            start: Point::new(320.0, 0.0),
            end: Point::new(280.0, 480.0),
            ..LightningConfig::default()
        },
        branch_probability: 0.25,
        ..LightningBranchConfig::default()
    };

    for seed in [1.0, 7.0, 42.0, 1234.0] {
        let mut cfg = base;
        cfg.bolt.seed = seed;
        let bolt = generate_lightning_with_branches(&cfg);
        let branch_points: usize = bolt.branches.iter().map(Vec::len).sum();
        println!(
            "seed {seed}: {} main points, {} branches ({branch_points} points)",
            bolt.main.len(),
            bolt.branches.len()
        );
    }

    let cfg = LightningBranchConfig {
        bolt: LightningConfig {
            seed: 42.0,
            ..base.bolt
        },
        ..base
    };
    println!("{}", serde_json::to_string(&generate_lightning_with_branches(&cfg))?);

    Ok(())
}
