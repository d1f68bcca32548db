//! End-to-end pipeline tests over real CSV files on disk.

use std::path::{Path, PathBuf};

use storelens_cli::pipeline::{self, PipelineConfig};
use storelens_model::{AnalysisOptions, DivisionPolicy};

const HEADER: &str = "Producto,Categoría del Producto,Precio,Costo de envío,Fecha de Compra,Vendedor,Calificación,Cantidad de cuotas\n";

fn write_csv(dir: &Path, name: &str, rows: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("{HEADER}{rows}")).unwrap();
    path
}

/// Store 1 grows and earns more; Store 2 shrinks and earns less.
fn two_store_inputs(dir: &Path) -> Vec<PathBuf> {
    let strong = write_csv(
        dir,
        "strong.csv",
        "Mesa,Muebles,2000,50,05/01/2021,Ana,5,1\n\
         Sofa,Muebles,3000,80,20/01/2021,Ana,5,3\n\
         Cama,Muebles,4000,90,10/02/2021,Ana,4,6\n\
         Armario,Muebles,6000,120,25/02/2021,Ana,5,12\n",
    );
    let weak = write_csv(
        dir,
        "weak.csv",
        "Silla,Muebles,800,60,03/01/2021,Luis,3,1\n\
         Banco,Muebles,600,55,18/01/2021,Luis,2,3\n\
         Taburete,Muebles,400,50,12/02/2021,Luis,3,6\n",
    );
    vec![strong, weak]
}

fn config(inputs: Vec<PathBuf>) -> PipelineConfig {
    PipelineConfig {
        inputs,
        output_dir: PathBuf::new(),
        render_charts: false,
        options: AnalysisOptions {
            division_policy: DivisionPolicy::Reject,
            ..AnalysisOptions::default()
        },
    }
}

#[test]
fn stronger_store_ranks_first() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = pipeline::run(&config(two_store_inputs(dir.path()))).unwrap();

    assert_eq!(outcome.records, 7);
    assert_eq!(outcome.ranking.len(), 2);
    assert!(outcome.charts.is_empty());
    assert_eq!(outcome.ranking[0].store, "Store 1");
    assert_eq!(outcome.ranking[1].store, "Store 2");
    assert!(outcome.ranking[0].final_score > outcome.ranking[1].final_score);
}

#[test]
fn reruns_over_the_same_files_agree() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = two_store_inputs(dir.path());

    let first = pipeline::run(&config(inputs.clone())).unwrap();
    let second = pipeline::run(&config(inputs)).unwrap();

    assert_eq!(first.ranking, second.ranking);
}

#[test]
fn single_month_store_fails_under_reject() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = two_store_inputs(dir.path());
    let short = write_csv(
        dir.path(),
        "short.csv",
        "Mesa,Muebles,1000,40,07/01/2021,Eva,4,1\n",
    );
    let mut inputs = inputs;
    inputs.push(short);

    let error = pipeline::run(&config(inputs)).unwrap_err();
    assert!(format!("{error:#}").contains("Store 3"));
}
