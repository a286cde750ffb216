//! End-to-end runs through the file-path entry points.
//!
//! Each test writes its fixtures into a private directory under the system
//! temp dir and removes it afterwards.

use keygraph::formats::{EdgeList, LoadOptions, ScoreCodec};
use keygraph::{
    CurrentFlowConfig, DiffusionConfig, EngineConfig, Error, KatzConfig, Measure, PageRankConfig,
};
use std::fs;
use std::path::{Path, PathBuf};

struct Workdir(PathBuf);

impl Workdir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("keygraph-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.0.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

impl Drop for Workdir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

const TALK: &str = "\
data model 4
model data 3
model error 2
error model 1
model train 2
train model 1
train data 1
";

fn sum(scores: &keygraph::CentralityResult) -> f64 {
    scores.values().sum()
}

#[test]
fn test_every_entry_point_scores_the_file() {
    let dir = Workdir::new("entry-points");
    let edges = dir.file("talk.edges", TALK);
    let options = LoadOptions::default();

    let pagerank = keygraph::pagerank_from_edge_file(&edges, &options, PageRankConfig::default())
        .unwrap();
    let diffusion =
        keygraph::diffusion_from_edge_file(&edges, &options, DiffusionConfig::default()).unwrap();
    let katz = keygraph::katz_from_edge_file(&edges, &options, KatzConfig::default()).unwrap();
    let closeness = keygraph::closeness_from_edge_file(&edges, &options).unwrap();
    let betweenness =
        keygraph::betweenness_from_edge_file(&edges, &options, CurrentFlowConfig::default())
            .unwrap();

    for scores in [&pagerank, &diffusion, &katz] {
        assert_eq!(scores.len(), 4);
        assert!((sum(scores) - 1.0).abs() < 1e-9);
    }

    // "model" sits between every other keyword
    for scores in [&pagerank, &diffusion, &katz, &closeness, &betweenness] {
        let best = scores
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(label, _)| label.as_str());
        assert_eq!(best, Some("model"));
    }
}

#[test]
fn test_custom_separator_file() {
    let dir = Workdir::new("separator");
    let edges = dir.file("talk.csv", &TALK.replace(' ', ","));

    let comma = LoadOptions::with_separator(",");
    let scores =
        keygraph::pagerank_from_edge_file(&edges, &comma, PageRankConfig::default()).unwrap();
    assert_eq!(scores.len(), 4);

    // Wrong separator: every line is one field
    let result =
        keygraph::pagerank_from_edge_file(&edges, &LoadOptions::default(), PageRankConfig::default());
    assert!(matches!(result, Err(Error::Parse { line: 1, .. })));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = Workdir::new("missing");
    let result = keygraph::centrality_from_edge_file(
        dir.path("nope.edges"),
        &LoadOptions::default(),
        &Measure::Katz(KatzConfig::default()),
    );
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_scores_file_roundtrip_with_stems() {
    let dir = Workdir::new("scores");
    let edges = dir.file("stems.edges", "run jump 2\njump run 1\nrun swim 1\n");
    let scores = keygraph::katz_from_edge_file(&edges, &LoadOptions::default(), KatzConfig::default())
        .unwrap();

    // Surface forms map onto stems; "dive" is not in the graph
    let keywords = ["running", "jumps", "swim", "dive"];
    let stem = |keyword: &str| -> String {
        match keyword {
            "running" => "run".to_owned(),
            "jumps" => "jump".to_owned(),
            other => other.to_owned(),
        }
    };

    let out = dir.path("stems.scores");
    let codec = ScoreCodec::default();
    codec.export_path(&scores, keywords, stem, &out).unwrap();
    let back = codec.import_path(&out).unwrap();

    assert_eq!(back.len(), 4);
    assert_eq!(back["running"], scores["run"]);
    assert_eq!(back["jumps"], scores["jump"]);
    assert_eq!(back["swim"], scores["swim"]);
    assert_eq!(back["dive"], 0.0);
}

#[test]
fn test_engine_config_file_drives_a_run() {
    let dir = Workdir::new("engine");
    let edges = dir.file("talk.tsv", &TALK.replace(' ', "\t"));
    let config = dir.file(
        "engine.json",
        r#"{
            "load": { "separator": "\t", "stochastic": true },
            "measures": [ { "pagerank": { "damping_factor": 0.9 } }, "current_flow_closeness" ],
            "score_separator": ","
        }"#,
    );

    let config = EngineConfig::from_json_file(&config).unwrap();
    let graph = EdgeList::read_path(&edges, &config.load).unwrap();
    assert!((graph.out_weight("model") - 1.0).abs() < 1e-12);

    let results = config.evaluate(&graph);
    let names: Vec<_> = results.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["pagerank", "current_flow_closeness"]);

    let (_, pagerank) = &results[0];
    let pagerank = pagerank.as_ref().unwrap();
    let out = dir.path("talk.scores");
    config
        .score_codec()
        .export_path(pagerank, graph.nodes(), |k| k.to_owned(), &out)
        .unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.lines().all(|line| line.split(',').count() == 2));
    assert_eq!(written.lines().count(), 4);
}

#[test]
fn test_edge_list_written_back_reloads() {
    let dir = Workdir::new("rewrite");
    let original = dir.file("talk.edges", TALK);
    let graph = EdgeList::read_path(&original, &LoadOptions::default()).unwrap();

    let copy = dir.path("copy.edges");
    EdgeList::write_path(&graph, &copy, " ").unwrap();
    assert_eq!(fs::read_to_string(&copy).unwrap(), TALK);

    let a = keygraph::closeness_from_edge_file(&original, &LoadOptions::default()).unwrap();
    let b = keygraph::closeness_from_edge_file(Path::new(&copy), &LoadOptions::default()).unwrap();
    assert_eq!(a, b);
}
