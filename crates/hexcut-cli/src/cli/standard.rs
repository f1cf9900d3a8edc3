//! `hexcut standard`: the full set of published variants.

use clap::Args;
use tracing::info;

use hexcut::compose::{LabelMode, RenderMode, RenderOptions};
use hexcut::OutputTarget;

use super::batch::{Batch, Job, JobKind};

#[derive(Args, Debug, Clone)]
pub struct StandardArgs {
    #[arg(long)]
    pub tiny: bool,

    #[arg(long)]
    pub large: bool,

    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

/// Every board and piece sheet variant, sharing one size profile.
pub fn standard_batch(args: &StandardArgs) -> Batch {
    let base = RenderOptions {
        tiny: args.tiny,
        large: args.large,
        scale_factor: args.scale,
        seed: args.seed,
        ..Default::default()
    };

    let board = |mode: RenderMode, labels: LabelMode, decoration: bool, gradient: bool, opacity: bool| {
        Job::new(
            JobKind::Board,
            RenderOptions { mode, labels, decoration, gradient, opacity, ..base.clone() },
        )
    };
    let pieces = |mode: RenderMode| Job::new(JobKind::Pieces, RenderOptions { mode, ..base.clone() });

    use LabelMode::{All, Sparse};
    use RenderMode::*;
    let bare = LabelMode::None;
    let jobs = vec![
        board(Display, All, false, true, true),
        board(Display, Sparse, false, true, true),
        board(Display, bare, false, true, true),
        board(Display, bare, true, true, true),
        board(Display, Sparse, true, true, true),
        board(Display, Sparse, true, false, true),
        board(Display, Sparse, true, false, false),
        board(FabricationEngrave, Sparse, true, true, true),
        board(FabricationEngrave, Sparse, true, false, true),
        board(FabricationEngrave, Sparse, true, false, false),
        board(FabricationCut, Sparse, false, true, true),
        board(FabricationNegative, Sparse, true, true, true),
        pieces(Display),
        pieces(FabricationCut),
        pieces(FabricationEngrave),
        pieces(FabricationNegative),
    ];

    Batch {
        name: "standard".to_string(),
        description: Some("every published board and piece sheet variant".to_string()),
        jobs,
    }
}

pub fn cmd_standard(args: &StandardArgs, target: &OutputTarget) -> hexcut::Result<()> {
    let batch = standard_batch(args);
    info!(jobs = batch.jobs.len(), "rendering standard set");
    let files = batch.run(target)?;
    info!(written = files.len(), dir = %target.dir.display(), "standard set done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn args() -> StandardArgs {
        StandardArgs { tiny: false, large: false, scale: 1.0, seed: 0 }
    }

    #[test]
    fn names_are_unique() {
        let batch = standard_batch(&args());
        let names: HashSet<String> = batch
            .jobs
            .iter()
            .map(|job| match job.kind {
                JobKind::Board => hexcut::compose::naming::board_name(&job.options),
                JobKind::Pieces => hexcut::compose::naming::pieces_name(&job.options),
            })
            .collect();
        assert_eq!(names.len(), batch.jobs.len());
        assert!(names.contains("pijersi_board_with_all_labels"));
        assert!(names.contains("pijersi_laser_board_with_few_labels_with_decoration_without_gradient_without_opacity_uniform"));
        assert!(names.contains("pijersi_laser_cubes_support"));
    }

    #[test]
    fn profile_flags_reach_every_job() {
        let batch = standard_batch(&StandardArgs { tiny: true, scale: 0.5, ..args() });
        assert!(batch.jobs.iter().all(|job| job.options.tiny && job.options.scale_factor == 0.5));
        assert!(batch.validate().is_ok());
    }
}
