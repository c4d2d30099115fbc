use super::*;
use crate::input::groups::parse_group_line;
use crate::pipeline::stage1_pathways::build_pathway_index;
use crate::pipeline::stage2_paralogs::build_paralog_groups;
use crate::test_support::{make_temp_dir, write_coexpr_dir, write_file};

fn pathways(lines: &[&str]) -> Stage1Output {
    let records: Vec<_> = lines.iter().map(|l| parse_group_line(l)).collect();
    build_pathway_index(&records, 50)
}

fn no_paralogs(stage1: &Stage1Output) -> ParalogGroups {
    ParalogGroups::empty(stage1.genes.len())
}

#[test]
fn test_pairs_are_deduplicated_across_directions() {
    let dir = make_temp_dir("stage3");
    write_coexpr_dir(
        &dir,
        &[("g1", "g2\t0.9\ng3\t0.1\n"), ("g2", "g1\t0.4\ng3\t0.2\n")],
    );
    let stage1 = pathways(&["P1\tg1\tg2", "P2\tg3\tg4"]);
    let out = run_stage3(&dir, &stage1, &no_paralogs(&stage1)).unwrap();

    assert_eq!(out.records.len(), 3);
    // g1 sorts first, so its direction of the (g1, g2) pair is retained.
    assert_eq!(out.records[0].value, 0.9);
    assert!(out.records[0].is_positive);
    assert_eq!(out.totals.total_true, 1);
    assert_eq!(out.totals.total_false, 2);
}

#[test]
fn test_sequence_ids_increase() {
    let dir = make_temp_dir("stage3");
    write_coexpr_dir(&dir, &[("a", "b\t1\nc\t2\n"), ("b", "c\t3\n")]);
    let stage1 = pathways(&["P\ta\tb\tc"]);
    let out = run_stage3(&dir, &stage1, &no_paralogs(&stage1)).unwrap();

    let ids: Vec<u64> = out.records.iter().map(|r| r.sequence_id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn test_self_pairs_and_unknown_genes_skipped() {
    let dir = make_temp_dir("stage3");
    write_coexpr_dir(
        &dir,
        &[
            ("g1", "g1\t1.0\ng2\t0.5\ngX\tnot-a-number\n"),
            ("gX", "g1\t0.7\n"),
        ],
    );
    let stage1 = pathways(&["P1\tg1\tg2"]);
    let out = run_stage3(&dir, &stage1, &no_paralogs(&stage1)).unwrap();

    assert_eq!(out.records.len(), 1);
    assert_eq!(out.stats.files_read, 1);
    assert_eq!(out.stats.files_skipped, 1);
}

#[test]
fn test_duplicate_partner_value_not_validated() {
    let dir = make_temp_dir("stage3");
    write_coexpr_dir(&dir, &[("g1", "g2\t0.5\n"), ("g2", "g1\tNA\n")]);
    let stage1 = pathways(&["P1\tg1\tg2"]);
    let out = run_stage3(&dir, &stage1, &no_paralogs(&stage1)).unwrap();
    assert_eq!(out.records.len(), 1);
}

#[test]
fn test_non_numeric_value_is_fatal() {
    let dir = make_temp_dir("stage3");
    write_coexpr_dir(&dir, &[("g1", "g2\tNA\n")]);
    let stage1 = pathways(&["P1\tg1\tg2"]);
    let err = run_stage3(&dir, &stage1, &no_paralogs(&stage1)).unwrap_err();
    assert!(matches!(err, InputError::Format { line: 1, .. }));
}

#[test]
fn test_malformed_line_is_fatal() {
    let dir = make_temp_dir("stage3");
    write_file(&dir.join("g1"), "g2\n");
    let stage1 = pathways(&["P1\tg1\tg2"]);
    assert!(run_stage3(&dir, &stage1, &no_paralogs(&stage1)).is_err());
}

#[test]
fn test_paralog_pairs_kept_but_not_counted() {
    let dir = make_temp_dir("stage3");
    write_coexpr_dir(&dir, &[("a", "b\t0.9\nc\t0.8\n"), ("b", "c\t0.1\n")]);
    let stage1 = pathways(&["P\ta\tb", "Q\tc\td"]);
    let paralog_records = vec![parse_group_line("F\ta\tb")];
    let paralogs = build_paralog_groups(&paralog_records, &stage1.genes);
    let out = run_stage3(&dir, &stage1, &paralogs).unwrap();

    assert_eq!(out.records.len(), 3);
    assert!(out.records[0].excluded);
    assert!(out.records[0].is_positive);
    assert_eq!(out.stats.excluded, 1);
    assert_eq!(out.totals.total_true, 0);
    assert_eq!(out.totals.total_false, 2);
}

#[test]
fn test_record_pair_direct() {
    let stage1 = pathways(&["P\ta\tb"]);
    let paralogs = no_paralogs(&stage1);
    let mut ctx = RunContext::new();
    let a = stage1.genes.get("a").unwrap();
    let b = stage1.genes.get("b").unwrap();

    assert!(
        ctx.record_pair(a, b, &stage1.same_pathway, &paralogs, || Ok(1.0))
            .unwrap()
    );
    assert!(
        !ctx.record_pair(b, a, &stage1.same_pathway, &paralogs, || Ok(2.0))
            .unwrap()
    );
    assert!(
        !ctx.record_pair(a, a, &stage1.same_pathway, &paralogs, || Ok(3.0))
            .unwrap()
    );
    assert_eq!(ctx.records.len(), 1);
    assert_eq!(ctx.totals.total_true, 1);
}
