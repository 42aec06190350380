//! The analysis run: spectra of the source image and of its translated and rotated
//! copies, plus phase-only, magnitude-only and full reconstructions.
//!
//! Numeric failures abort the run. Output failures do not: every save is attempted
//! and its outcome recorded in the [`PipelineReport`].


use std::path::PathBuf;

use common::file_utils::{ensure_dir, output_file};
use log::{error, info, warn};
use spectra::{
    center, fft_shift, forward, rotate, translate, Grid, Reconstruction, Result, Spectrum,
};

use crate::config::LabConfig;
use crate::render::{GridRenderer, Scaling};

/// Which outputs were written and which failed, with the failure message.
#[derive(Debug, Default)]
pub struct PipelineReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl PipelineReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct Pipeline<'a, R: GridRenderer> {
    config: &'a LabConfig,
    renderer: &'a R,
    report: PipelineReport,
}

impl<'a, R: GridRenderer> Pipeline<'a, R> {
    pub fn new(config: &'a LabConfig, renderer: &'a R) -> Self {
        Self {
            config,
            renderer,
            report: PipelineReport::default(),
        }
    }

    pub fn run(mut self, image: &Grid<f64>) -> Result<PipelineReport> {
        info!(
            "Analyzing {}x{} image ({} transform)",
            image.width(),
            image.height(),
            self.config.method
        );

        // Variants first: a geometry error must not leave partial outputs.
        let warp = self.config.warp_options();

        let [tx, ty] = self.config.translation;
        info!("Translating by ({}, {})", tx, ty);
        let translated = translate(image, tx, ty, &warp);

        let rotation = self.config.rotation();
        info!(
            "Rotating by {} degrees (scale {})",
            rotation.angle_degrees, rotation.scale
        );
        let rotated = rotate(image, &rotation, &warp)?;

        if let Err(e) = ensure_dir(&self.config.output_dir) {
            warn!(
                "Cannot create output directory '{}': {}",
                self.config.output_dir.display(),
                e
            );
        }

        self.original_spectrum(image)?;
        self.centered_analysis(image)?;

        self.save("translated", &translated, Scaling::Clamp);
        self.variant_analysis("translated", &translated)?;

        self.save("rotated", &rotated, Scaling::Clamp);
        self.variant_analysis("rotated", &rotated)?;

        info!(
            "Wrote {} outputs, {} failed",
            self.report.written.len(),
            self.report.failed.len()
        );
        Ok(self.report)
    }

    /// Spectrum without centering: the zero frequency sits in the corners.
    fn original_spectrum(&mut self, image: &Grid<f64>) -> Result<()> {
        let magnitude = forward(self.config.method, image)?.magnitude();
        self.save("original_frequency_spectrum", &magnitude, Scaling::Linear);
        self.save(
            "original_frequency_spectrum_shifted",
            &fft_shift(&magnitude),
            Scaling::Log,
        );
        Ok(())
    }

    fn centered_analysis(&mut self, image: &Grid<f64>) -> Result<()> {
        let spectrum = self.centered_spectrum(image)?;
        let (magnitude, phase) = spectrum.to_polar();

        self.save("centered_frequency_spectrum", &magnitude, Scaling::Linear);
        self.save("log_centered_frequency_spectrum", &magnitude, Scaling::Log);
        self.save("centered_phase", &phase, Scaling::Linear);

        let phase_only = self.reconstruct(Reconstruction::phase_only(&phase))?;
        self.save("phase_only_reconstruction", &phase_only, Scaling::Linear);

        let magnitude_only = self.reconstruct(Reconstruction::magnitude_only(&magnitude))?;
        self.save("magnitude_only_reconstruction", &magnitude_only, Scaling::Log);

        let full = self.reconstruct(Reconstruction::full(&magnitude, &phase))?;
        self.save("full_reconstruction", &full, Scaling::Clamp);

        Ok(())
    }

    /// Spectrum views of a transformed copy, computed from that copy.
    fn variant_analysis(&mut self, prefix: &str, image: &Grid<f64>) -> Result<()> {
        let (magnitude, phase) = self.centered_spectrum(image)?.to_polar();

        self.save(&format!("{}_log_spectrum", prefix), &magnitude, Scaling::Log);
        self.save(&format!("{}_phase", prefix), &phase, Scaling::Linear);

        let phase_only = self.reconstruct(Reconstruction::phase_only(&phase))?;
        self.save(
            &format!("{}_phase_only_reconstruction", prefix),
            &phase_only,
            Scaling::Linear,
        );

        Ok(())
    }

    fn centered_spectrum(&self, image: &Grid<f64>) -> Result<Spectrum> {
        forward(self.config.method, &center(image))
    }

    fn reconstruct(&self, reconstruction: Reconstruction<'_>) -> Result<Grid<f64>> {
        reconstruction.method(self.config.method).execute()
    }

    fn save(&mut self, name: &str, grid: &Grid<f64>, scaling: Scaling) {
        let path = output_file(&self.config.output_dir, name, "png");
        match self.renderer.render(grid, scaling, &path) {
            Ok(()) => {
                info!("Saved {} ({})", path.display(), scaling);
                self.report.written.push(path);
            }
            Err(e) => {
                error!("{}", e);
                self.report.failed.push((path, e.to_string()));
            }
        }
    }
}
