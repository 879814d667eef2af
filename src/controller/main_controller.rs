use crate::common::*;

use crate::dto::chart::rendered_artifact::*;

use crate::model::chart::chart_spec::*;

use crate::traits::service_traits::{chart_job_service::*, chart_service::*};

use crate::utils_modules::io_utils::*;

#[derive(Debug, new)]
pub struct MainController<C: ChartService, J: ChartJobService> {
    chart_service: C,
    job_service: J,
    output_dir: PathBuf,
}

impl<C: ChartService, J: ChartJobService> MainController<C, J> {
    #[doc = r#"
        Runs the chart pipeline from start to finish.

        1. Make sure the output directory exists (parents included)
        2. Render every chart job in order; each job writes its image before the next starts
        3. Write one confirmation line per image to `out`
        4. Write one summary line naming the absolute output directory

        The first failure aborts the whole run; there is no partial success.

        # Arguments
        * `out` - sink for the human readable progress lines (stdout in production)

        # Returns
        * `anyhow::Result<Vec<RenderedArtifact>>` - the written images, in job order
    "#]
    pub fn main_task<W: Write>(&self, out: &mut W) -> anyhow::Result<Vec<RenderedArtifact>> {
        ensure_dir_all(&self.output_dir)?;

        let chart_jobs: Vec<ChartSpec> = self.job_service.chart_jobs()?;
        let mut artifacts: Vec<RenderedArtifact> = Vec::with_capacity(chart_jobs.len());

        for chart_job in &chart_jobs {
            let artifact: RenderedArtifact = self
                .chart_service
                .render_chart(chart_job, &self.output_dir)
                .with_context(|| {
                    format!(
                        "[MainController->main_task] failed to render {}",
                        chart_job.file_name()
                    )
                })?;

            writeln!(out, "Generated: {}", artifact.path().display())?;
            artifacts.push(artifact);
        }

        let absolute_dir: PathBuf = resolve_absolute_dir(&self.output_dir)?;
        writeln!(
            out,
            "All {} benchmark charts generated successfully. Output directory: {}",
            artifacts.len(),
            absolute_dir.display()
        )?;

        info!(
            "Chart pipeline finished: {} images in {:?}",
            artifacts.len(),
            absolute_dir
        );

        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::chart::annotation::*;
    use crate::model::configs::render_config::*;
    use crate::service::{chart_job_service_impl::*, chart_service_impl::*};
    use tempfile::tempdir;

    /* low dpi keeps the rendering tests fast; the drawing path is the same */
    fn controller(output_dir: PathBuf) -> MainController<ChartServiceImpl, BenchmarkChartJobServiceImpl> {
        let render_config: RenderConfig = RenderConfig::new(40, "sans-serif".to_string(), 0.1);
        MainController::new(
            ChartServiceImpl::new(render_config),
            BenchmarkChartJobServiceImpl::new(),
            output_dir,
        )
    }

    fn run(output_dir: PathBuf) -> (Vec<RenderedArtifact>, String) {
        let mut out: Vec<u8> = Vec::new();
        let artifacts: Vec<RenderedArtifact> = controller(output_dir).main_task(&mut out).unwrap();
        (artifacts, String::from_utf8(out).unwrap())
    }

    #[test]
    fn empty_root_gets_four_images_and_five_lines() {
        let root = tempdir().unwrap();
        let output_dir: PathBuf = root.path().join("docs").join("images");

        let (artifacts, console) = run(output_dir.clone());

        let mut written: Vec<String> = fs::read_dir(&output_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        written.sort();
        assert_eq!(
            written,
            vec![
                "indicators_performance.png",
                "language_comparison.png",
                "memory_usage.png",
                "orderbook_performance.png"
            ]
        );

        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(lines.len(), 5);
        for (line, artifact) in lines.iter().zip(&artifacts) {
            assert_eq!(*line, format!("Generated: {}", artifact.path().display()));
        }

        let absolute: PathBuf = fs::canonicalize(&output_dir).unwrap();
        assert!(lines[4].ends_with(&absolute.display().to_string()));

        for artifact in &artifacts {
            let image = image::open(artifact.path()).unwrap();
            assert_eq!((image.width(), image.height()), (*artifact.width(), *artifact.height()));
            assert!(*artifact.width() > 0 && *artifact.height() > 0);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let first_root = tempdir().unwrap();
        let second_root = tempdir().unwrap();

        let (first, _) = run(first_root.path().to_path_buf());
        let (second, _) = run(second_root.path().to_path_buf());

        assert_eq!(first.len(), 4);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!((a.width(), a.height()), (b.width(), b.height()));
            assert_eq!(a.annotations(), b.annotations());
            assert_eq!(fs::read(a.path()).unwrap(), fs::read(b.path()).unwrap());
        }
    }

    #[test]
    fn rerun_overwrites_and_keeps_unrelated_files() {
        let root = tempdir().unwrap();
        let notes: PathBuf = root.path().join("README.txt");
        fs::write(&notes, b"hand written").unwrap();

        run(root.path().to_path_buf());
        let (artifacts, _) = run(root.path().to_path_buf());

        assert_eq!(artifacts.len(), 4);
        assert_eq!(fs::read(&notes).unwrap(), b"hand written");
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 5);
    }

    #[test]
    fn annotations_reach_the_artifacts() {
        let root = tempdir().unwrap();
        let (artifacts, _) = run(root.path().to_path_buf());

        let texts = |idx: usize, kind: AnnotationKind| -> Vec<String> {
            artifacts[idx]
                .annotations()
                .iter()
                .filter(|a| *a.kind() == kind)
                .map(|a| a.text().clone())
                .collect()
        };

        assert_eq!(texts(0, AnnotationKind::ValueLabel).len(), 8);
        assert_eq!(texts(1, AnnotationKind::ValueLabel).len(), 10);
        assert_eq!(texts(2, AnnotationKind::RatioBadge)[0], "1.2x slower");
        assert_eq!(texts(3, AnnotationKind::PointCallout)[0], "0.00 MB");
    }

    #[test]
    fn unwritable_output_location_aborts_the_run() {
        let root = tempdir().unwrap();
        let blocker: PathBuf = root.path().join("docs");
        fs::write(&blocker, b"file, not a directory").unwrap();

        let mut out: Vec<u8> = Vec::new();
        let result = controller(blocker.join("images")).main_task(&mut out);

        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
