use crate::common::*;

use crate::enums::institution_selection::*;
use crate::env_configuration::env_config::*;
use crate::model::configs::{selection_config::*, total_config::*};
use crate::model::report::{report_document::*, territorial_summary::*};
use crate::traits::service_traits::{report_service::*, summary_service::*, template_service::*};
use crate::utils_modules::{io_utils::*, time_utils::*};

#[derive(Debug, new)]
pub struct MainController<S: ReportService, M: SummaryService, T: TemplateService> {
    report_service: S,
    summary_service: M,
    template_service: T,
}

impl<S: ReportService, M: SummaryService, T: TemplateService> MainController<S, M, T> {
    #[doc = r#"
        Runs one complete generation pass.

        1. Reads the selection snapshot (`SELECTION_PATH`)
        2. Computes the territorial summary once, shared by every report
        3. Per selected institution: assembles the context, binds the
           template, writes `report_<label>.html` into the output directory
        4. A failure for one institution is logged and skipped; the remaining
           institutions still produce their reports

        # Returns
        * `anyhow::Result<()>` - Err only on collaborator failures (selection
          snapshot, output directory), never on a per-institution error
    "#]
    pub fn generate_reports(&self) -> anyhow::Result<()> {
        let selection_config: SelectionConfig =
            read_toml_from_file::<SelectionConfig>(&SELECTION_PATH)?;
        let output_dir: &str = get_report_config_info().output_dir();

        info!(
            "Generation started at {}: {} institution(s), categories {:?}",
            get_current_datetime_str(),
            selection_config.institutions().len(),
            selection_config.categories()
        );

        self.run_generation(&selection_config, output_dir)
    }

    #[doc = r#"
        The generation loop proper, over an already-resolved selection
        snapshot. An error inside one institution's pipeline never escapes
        the loop; only output-directory failures do.
    "#]
    fn run_generation(
        &self,
        selection_config: &SelectionConfig,
        output_dir: &str,
    ) -> anyhow::Result<()> {
        fs::create_dir_all(output_dir)?;

        /* Same for every institution, computed once per run. */
        let territorial: TerritorialSummary = self.summary_service.territorial_summary();

        let mut generated: usize = 0;

        for raw_code in selection_config.institutions() {
            let selection: InstitutionSelection = InstitutionSelection::parse(raw_code);

            match self.generate_single_report(&selection, selection_config, &territorial) {
                Ok(document) => {
                    if let Err(e) = self.write_document(output_dir, &document) {
                        error!(
                            "[MainController->run_generation] Failed to write '{}': {:?}",
                            document.file_name(),
                            e
                        );
                        continue;
                    }
                    info!(
                        "Report generated: {} ({})",
                        document.file_name(),
                        document.mime_type()
                    );
                    generated += 1;
                }
                Err(e) => {
                    error!(
                        "[MainController->run_generation] Report failed for '{}': {:?}",
                        selection.label(),
                        e
                    );
                    continue;
                }
            }
        }

        info!(
            "Report generation finished: {}/{} documents written",
            generated,
            selection_config.institutions().len()
        );

        Ok(())
    }

    #[doc = "Assembles and renders one institution's report"]
    fn generate_single_report(
        &self,
        selection: &InstitutionSelection,
        selection_config: &SelectionConfig,
        territorial: &TerritorialSummary,
    ) -> anyhow::Result<ReportDocument> {
        let context = self
            .report_service
            .build_report_context(selection, selection_config, territorial)?;

        self.template_service.render_document(&context)
    }

    fn write_document(&self, output_dir: &str, document: &ReportDocument) -> anyhow::Result<()> {
        let path: PathBuf = Path::new(output_dir).join(document.file_name());
        fs::write(&path, document.html())?;
        Ok(())
    }
}
