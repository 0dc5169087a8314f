use crate::common::*;

use crate::dto::{year_pair_row::*, year_value_row::*};
use crate::enums::{category::*, institution_selection::*};
use crate::model::configs::selection_config::*;
use crate::model::report::{report_context::*, territorial_summary::*};
use crate::service::narrative_service_impl::CLAUSE_SEPARATOR;
use crate::traits::service_traits::{
    aggregation_service::*, chart_service::*, narrative_service::*, report_service::*,
};
use crate::utils_modules::{format_utils::*, time_utils::*};

const ENROLLMENT_COLOR: (u8, u8, u8) = (0x34, 0x98, 0xdb);
const ATTENDANCE_COLOR: (u8, u8, u8) = (0xe6, 0x7e, 0x22);

#[doc = "Fixed note under a single institution's attendance table"]
const PARTIAL_PERIOD_NOTE: &str =
    "<div class=\"note\">Most recent year reflects a partial-period attendance measurement.</div>";

#[derive(Debug, new)]
pub struct ReportServiceImpl<A: AggregationService, N: NarrativeService, C: ChartService> {
    aggregation_service: Arc<A>,
    narrative_service: N,
    chart_service: C,
}

impl<A, N, C> ReportServiceImpl<A, N, C>
where
    A: AggregationService,
    N: NarrativeService,
    C: ChartService,
{
    fn assemble_enrollment(
        &self,
        context: &mut ReportContext,
        selection: &InstitutionSelection,
        selection_config: &SelectionConfig,
    ) -> anyhow::Result<()> {
        let years: BTreeSet<i32> = selection_config.enrollment_year_set();
        let rows: Vec<YearValueRow> = self
            .aggregation_service
            .enrollment_series(selection, Some(&years));

        if rows.is_empty() {
            info!(
                "Category '{}' produced no rows for '{}', section omitted",
                Category::Enrollment.as_str(),
                context.institution_label
            );
            return Ok(());
        }

        context.texts.enrollment = Some(
            self.narrative_service
                .trend_narrative(&rows, "Enrollment"),
        );

        let table_rows: Vec<Vec<String>> = rows
            .iter()
            .rev()
            .map(|row| vec![row.year.to_string(), format_whole(row.value)])
            .collect();
        context.tables.enrollment =
            Some(render_html_table(&["Year", "Enrollment"], &table_rows));

        context.charts.enrollment = Some(self.chart_service.render_single_series(
            "Enrollment Trend",
            &rows,
            ENROLLMENT_COLOR,
            ValueFormat::Count,
        )?);

        Ok(())
    }

    fn assemble_attendance(
        &self,
        context: &mut ReportContext,
        selection: &InstitutionSelection,
        selection_config: &SelectionConfig,
    ) -> anyhow::Result<()> {
        let years: BTreeSet<i32> = selection_config.attendance_year_set();
        let rows: Vec<YearValueRow> = self
            .aggregation_service
            .attendance_series(selection, Some(&years));

        if rows.is_empty() {
            info!(
                "Category '{}' produced no rows for '{}', section omitted",
                Category::Attendance.as_str(),
                context.institution_label
            );
            return Ok(());
        }

        context.texts.attendance = Some(
            self.narrative_service
                .trend_narrative(&rows, "Attendance"),
        );

        let table_rows: Vec<Vec<String>> = rows
            .iter()
            .rev()
            .map(|row| vec![row.year.to_string(), format_one_decimal(row.value)])
            .collect();
        let mut table: String = render_html_table(&["Year", "Attendance"], &table_rows);

        /* The aggregate view spans complete periods; only a concrete
        institution carries the partial-period caveat. */
        if !selection.is_total() {
            table.push_str(PARTIAL_PERIOD_NOTE);
        }
        context.tables.attendance = Some(table);

        context.charts.attendance = Some(self.chart_service.render_single_series(
            "Attendance Trend (%)",
            &rows,
            ATTENDANCE_COLOR,
            ValueFormat::Percent,
        )?);

        Ok(())
    }

    fn assemble_scores(
        &self,
        context: &mut ReportContext,
        selection: &InstitutionSelection,
        selection_config: &SelectionConfig,
    ) -> anyhow::Result<()> {
        let years: BTreeSet<i32> = selection_config.scores_year_set();
        let series: BTreeMap<String, Vec<YearPairRow>> = self
            .aggregation_service
            .score_series(selection, Some(&years));

        if series.is_empty() {
            info!(
                "Category '{}' produced no rows for '{}', section omitted",
                Category::Scores.as_str(),
                context.institution_label
            );
            return Ok(());
        }

        for (level, rows) in series {
            if rows.is_empty() {
                continue;
            }

            let reading_rows: Vec<YearValueRow> = rows
                .iter()
                .map(|row| YearValueRow::new(row.year, row.reading))
                .collect();
            let math_rows: Vec<YearValueRow> = rows
                .iter()
                .map(|row| YearValueRow::new(row.year, row.math))
                .collect();

            let reading_text: String = self
                .narrative_service
                .trend_narrative(&reading_rows, "Reading");
            let math_text: String = self.narrative_service.trend_narrative(&math_rows, "Math");

            let narrative: String = [reading_text, math_text]
                .into_iter()
                .filter(|text| !text.is_empty())
                .collect::<Vec<String>>()
                .join(CLAUSE_SEPARATOR);
            context.texts.scores.insert(level.clone(), narrative);

            let table_rows: Vec<Vec<String>> = rows
                .iter()
                .rev()
                .map(|row| {
                    vec![
                        row.year.to_string(),
                        format_whole(row.reading),
                        format_whole(row.math),
                    ]
                })
                .collect();
            context.tables.scores.insert(
                level.clone(),
                render_html_table(&["Year", "Reading", "Math"], &table_rows),
            );

            let chart: String = self
                .chart_service
                .render_dual_series(&format!("Scores Trend - {}", level), &rows)?;
            context.charts.scores.insert(level, chart);
        }

        Ok(())
    }
}

impl<A, N, C> ReportService for ReportServiceImpl<A, N, C>
where
    A: AggregationService,
    N: NarrativeService,
    C: ChartService,
{
    fn build_report_context(
        &self,
        selection: &InstitutionSelection,
        selection_config: &SelectionConfig,
        territorial: &TerritorialSummary,
    ) -> anyhow::Result<ReportContext> {
        let mut context: ReportContext = ReportContext::empty(
            selection.label(),
            territorial.clone(),
            get_current_date_str(),
        );

        if selection_config.includes(Category::Enrollment) {
            self.assemble_enrollment(&mut context, selection, selection_config)?;
        }
        if selection_config.includes(Category::Attendance) {
            self.assemble_attendance(&mut context, selection, selection_config)?;
        }
        if selection_config.includes(Category::Scores) {
            self.assemble_scores(&mut context, selection, selection_config)?;
        }

        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::{
        attendance_record::*, enrollment_record::*, score_record::*,
    };
    use crate::repository::dataset_repository_impl::*;
    use crate::service::{
        aggregation_service_impl::*, chart_service_impl::*, narrative_service_impl::*,
    };

    type TestReportService = ReportServiceImpl<
        AggregationServiceImpl<DatasetRepositoryImpl>,
        NarrativeServiceImpl,
        ChartServiceImpl,
    >;

    fn service_over(
        enrollment: Vec<EnrollmentRecord>,
        attendance: Vec<AttendanceRecord>,
        scores: Vec<ScoreRecord>,
    ) -> TestReportService {
        let repository = Arc::new(DatasetRepositoryImpl::new(enrollment, attendance, scores));
        ReportServiceImpl::new(
            Arc::new(AggregationServiceImpl::new(repository)),
            NarrativeServiceImpl::new(),
            ChartServiceImpl::new(),
        )
    }

    fn selection_config(categories: Vec<Category>, years: Vec<i32>) -> SelectionConfig {
        SelectionConfig {
            institutions: vec!["10045".to_string()],
            categories,
            enrollment_years: years.clone(),
            attendance_years: years.clone(),
            scores_years: years,
        }
    }

    #[test]
    fn unselected_years_leave_the_category_absent() {
        let service: TestReportService = service_over(
            vec![EnrollmentRecord::new("10045".to_string(), 2024, 150)],
            vec![],
            vec![],
        );
        let config: SelectionConfig = selection_config(vec![Category::Enrollment], vec![]);

        let context: ReportContext = service
            .build_report_context(
                &InstitutionSelection::parse("10045"),
                &config,
                &TerritorialSummary::default(),
            )
            .expect("context assembly failed");

        assert!(context.texts.enrollment.is_none());
        assert!(context.tables.enrollment.is_none());
        assert!(context.charts.enrollment.is_none());

        /* The renderer-facing mapping must not carry the key at all. */
        let json: Value = serde_json::to_value(&context).expect("serialization failed");
        assert!(json["texts"].get("enrollment").is_none());
        assert!(json["tables"].get("enrollment").is_none());
        assert!(json["charts"].get("enrollment").is_none());
    }

    #[test]
    fn enrollment_category_fills_text_table_and_chart() {
        let service: TestReportService = service_over(
            vec![
                EnrollmentRecord::new("10045".to_string(), 2023, 100),
                EnrollmentRecord::new("10045".to_string(), 2024, 150),
            ],
            vec![],
            vec![],
        );
        let config: SelectionConfig =
            selection_config(vec![Category::Enrollment], vec![2023, 2024]);

        let context: ReportContext = service
            .build_report_context(
                &InstitutionSelection::parse("10045"),
                &config,
                &TerritorialSummary::default(),
            )
            .expect("context assembly failed");

        assert_eq!(
            context.texts.enrollment.as_deref(),
            Some("Enrollment increased 50.0% relative to 2023")
        );
        let table: String = context.tables.enrollment.expect("missing table");
        /* descending table order */
        assert!(table.find("2024").unwrap() < table.find("2023").unwrap());
        assert!(!context.charts.enrollment.expect("missing chart").is_empty());
    }

    #[test]
    fn attendance_note_only_for_single_institutions() {
        let records: Vec<AttendanceRecord> = vec![
            AttendanceRecord::new("10045".to_string(), 2023, 0.9),
            AttendanceRecord::new("10045".to_string(), 2024, 0.8),
        ];
        let service: TestReportService = service_over(vec![], records.clone(), vec![]);
        let config: SelectionConfig =
            selection_config(vec![Category::Attendance], vec![2023, 2024]);

        let single: ReportContext = service
            .build_report_context(
                &InstitutionSelection::parse("10045"),
                &config,
                &TerritorialSummary::default(),
            )
            .expect("context assembly failed");
        let table: String = single.tables.attendance.expect("missing table");
        assert!(table.contains("partial-period"));
        /* descending rows, percent values with one decimal */
        assert!(table.contains("<td>2024</td><td>80.0</td>"));
        assert!(table.contains("<td>2023</td><td>90.0</td>"));
        assert!(table.find("2024").unwrap() < table.find("2023").unwrap());

        let service: TestReportService = service_over(vec![], records, vec![]);
        let total: ReportContext = service
            .build_report_context(
                &InstitutionSelection::Total,
                &config,
                &TerritorialSummary::default(),
            )
            .expect("context assembly failed");
        assert!(!total
            .tables
            .attendance
            .expect("missing table")
            .contains("partial-period"));
    }

    #[test]
    fn score_narratives_join_reading_and_math() {
        let service: TestReportService = service_over(
            vec![],
            vec![],
            vec![
                ScoreRecord::new("10045".to_string(), 2023, "4B".to_string(), 250.0, 240.0),
                ScoreRecord::new("10045".to_string(), 2024, "4B".to_string(), 255.0, 246.0),
            ],
        );
        let config: SelectionConfig = selection_config(vec![Category::Scores], vec![2023, 2024]);

        let context: ReportContext = service
            .build_report_context(
                &InstitutionSelection::parse("10045"),
                &config,
                &TerritorialSummary::default(),
            )
            .expect("context assembly failed");

        let narrative: &String = context.texts.scores.get("4B").expect("missing level");
        assert_eq!(
            narrative,
            "Reading increased 2.0% relative to 2023 · Math increased 2.5% relative to 2023"
        );
        assert!(context.charts.scores.contains_key("4B"));
    }

    #[test]
    fn unselected_category_is_never_assembled() {
        let service: TestReportService = service_over(
            vec![EnrollmentRecord::new("10045".to_string(), 2024, 150)],
            vec![AttendanceRecord::new("10045".to_string(), 2024, 0.9)],
            vec![],
        );
        let config: SelectionConfig = selection_config(vec![Category::Enrollment], vec![2024]);

        let context: ReportContext = service
            .build_report_context(
                &InstitutionSelection::parse("10045"),
                &config,
                &TerritorialSummary::default(),
            )
            .expect("context assembly failed");

        assert!(context.tables.enrollment.is_some());
        assert!(context.tables.attendance.is_none());
    }
}
