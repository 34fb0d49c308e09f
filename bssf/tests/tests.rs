#[cfg(test)]
mod tests {
    use std::path::Path;

    use bssf::config::BssfConfig;
    use bssf::io;
    use float_cmp::approx_eq;
    use itertools::Itertools;
    use sheetnest::io::ext_repr::ExtPackingJob;
    use sheetnest::packing::batch::{pack_all, pack_all_parallel};
    use test_case::test_case;

    fn read_demo_jobs() -> Vec<ExtPackingJob> {
        io::read_json(Path::new("../assets/demo_jobs.json")).expect("demo jobs should parse")
    }

    #[test_case(false; "sequential")]
    #[test_case(true; "parallel")]
    fn demo_jobs_pack_end_to_end(parallel: bool) {
        let config = BssfConfig::default();
        let jobs = read_demo_jobs()
            .iter()
            .map(sheetnest::io::import)
            .try_collect::<_, Vec<_>, _>()
            .expect("demo jobs should import");

        let outcomes = match parallel {
            true => pack_all_parallel(&jobs, config.nest_config),
            false => pack_all(&jobs, config.nest_config).collect_vec(),
        };

        assert_eq!(outcomes.len(), jobs.len());

        // the melamine and plywood jobs are packable with stock-size sheets
        assert!(outcomes[0].is_fully_packed());
        assert!(outcomes[0].result().sheets_used > 0);
        assert!(outcomes[1].is_fully_packed());

        // the degenerate entry reports zero numbers and its demand as unplaced
        let degenerate = outcomes[2].result();
        assert_eq!(degenerate.sheets_used, 0);
        assert_eq!(degenerate.utilization, 0.0);
        assert_eq!(outcomes[2].unplaced().len(), 1);

        for outcome in &outcomes {
            let r = outcome.result();
            assert!((0.0..=1.0).contains(&r.utilization));
        }
    }

    #[test]
    fn export_applies_presentation_rounding() {
        let jobs = read_demo_jobs()
            .iter()
            .map(sheetnest::io::import)
            .try_collect::<_, Vec<_>, _>()
            .expect("demo jobs should import");

        let outcome = pack_all(&jobs, BssfConfig::default().nest_config)
            .next()
            .unwrap();
        let ext = sheetnest::io::export(&outcome);

        // 48x96 sheet is exactly 32 ft²
        assert!(approx_eq!(f32, ext.sheet_ft2, 32.0, ulps = 2));
        // rounded to 2 decimals: scaling by 100 yields a whole number
        let scaled = ext.total_ft2 * 100.0;
        assert!(approx_eq!(f32, scaled, scaled.round(), epsilon = 1e-2));
        assert!(ext.fully_packed);
        assert!(ext.unplaced.is_empty());
    }

    #[test]
    fn default_config_carries_the_documented_process_parameters() {
        let config = BssfConfig::default();
        assert!(approx_eq!(f32, config.nest_config.kerf, 0.625, ulps = 2));
        assert!(approx_eq!(f32, config.nest_config.edge_margin, 0.5, ulps = 2));
        assert!(!config.parallel);
    }

    #[test]
    fn partial_config_files_fall_back_to_defaults() {
        let config: BssfConfig = serde_json::from_str("{\"parallel\": true}").unwrap();
        assert!(config.parallel);
        assert!(approx_eq!(f32, config.nest_config.kerf, 0.625, ulps = 2));
    }
}
