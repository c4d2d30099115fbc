pub mod stage1_pathways;
pub mod stage2_paralogs;
pub mod stage3_pairs;
pub mod stage4_pauc;
pub mod stage5_report;
