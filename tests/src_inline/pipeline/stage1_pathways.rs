use super::*;
use crate::input::groups::parse_group_line;
use crate::test_support::{make_temp_dir, write_file};

fn records(lines: &[&str]) -> Vec<GroupRecord> {
    lines.iter().map(|l| parse_group_line(l)).collect()
}

#[test]
fn test_same_pathway_is_symmetric_and_irreflexive() {
    let out = build_pathway_index(&records(&["P1\tA\tB\tC"]), 50);
    let a = out.genes.get("A").unwrap();
    let b = out.genes.get("B").unwrap();
    let c = out.genes.get("C").unwrap();

    for &(x, y) in &[(a, b), (a, c), (b, c)] {
        assert!(out.same_pathway.contains(x, y));
        assert!(out.same_pathway.contains(y, x));
    }
    for g in [a, b, c] {
        assert!(!out.same_pathway.contains(g, g));
    }
    assert_eq!(out.same_pathway.len(), 3);
}

#[test]
fn test_size_filter() {
    let out = build_pathway_index(
        &records(&["single\tA", "big\tB\tC\tD\tE", "ok\tF\tG"]),
        3,
    );
    assert_eq!(out.pathways_used, 1);
    assert_eq!(out.pathways_skipped, 2);
    assert!(out.genes.get("A").is_none());
    assert!(out.genes.get("B").is_none());
    assert!(out.genes.get("F").is_some());
    assert_eq!(out.genes.len(), 2);
    assert_eq!(out.same_pathway.len(), 1);
}

#[test]
fn test_size_filter_bounds_are_inclusive() {
    let out = build_pathway_index(&records(&["P\tA\tB\tC"]), 3);
    assert_eq!(out.pathways_used, 1);
    let out = build_pathway_index(&records(&["P\tA\tB"]), 3);
    assert_eq!(out.pathways_used, 1);
}

#[test]
fn test_links_accumulate_across_pathways() {
    let out = build_pathway_index(&records(&["P1\tA\tB", "P2\tB\tC"]), 50);
    let a = out.genes.get("A").unwrap();
    let b = out.genes.get("B").unwrap();
    let c = out.genes.get("C").unwrap();
    assert!(out.same_pathway.contains(a, b));
    assert!(out.same_pathway.contains(b, c));
    assert!(!out.same_pathway.contains(a, c));
    assert_eq!(out.genes.len(), 3);
}

#[test]
fn test_run_stage1_reads_file() {
    let dir = make_temp_dir("stage1");
    let path = dir.join("pathways.tsv");
    write_file(&path, "P1\tg1\tg2\tg3\nP2\tg9\n");

    let out = run_stage1(&path, 50).unwrap();
    assert_eq!(out.genes.len(), 3);
    assert_eq!(out.pathways_skipped, 1);
}

#[test]
fn test_run_stage1_missing_file() {
    let dir = make_temp_dir("stage1");
    assert!(run_stage1(&dir.join("missing.tsv"), 50).is_err());
}
