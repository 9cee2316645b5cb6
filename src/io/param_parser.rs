use std::fs;

use serde::Deserialize;

use crate::{
    disc::{boundary::BoundaryCondition, scheme::Scheme},
    error::SchemeResult,
    initialization::InitialCondition,
};

#[derive(Deserialize, Debug)]
pub struct SolverParamParser {
    pub scheme: Scheme,
    pub cell_num: usize,
    pub left_coord: f64,
    pub right_coord: f64,
    pub velocity: f64,
    pub cfl: f64,
    pub final_time: f64,
    pub final_step: usize,
    pub boundary: BoundaryCondition,
    pub initial_condition: InitialCondition,
    /// Csv file written after the run, if any.
    #[serde(default)]
    pub output: Option<String>,
}
impl SolverParamParser {
    pub fn parse(file_path: &str) -> SchemeResult<Self> {
        let file_content = fs::read_to_string(file_path)?;
        Self::parse_str(&file_content)
    }
    pub fn parse_str(content: &str) -> SchemeResult<Self> {
        let param: SolverParamParser = serde_json::from_str(content)?;
        Ok(param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str() {
        let json = r#"{
            "scheme": "superbee",
            "cell_num": 100,
            "left_coord": 0.0,
            "right_coord": 1.0,
            "velocity": 1.0,
            "cfl": 0.5,
            "final_time": 0.25,
            "final_step": 1000,
            "boundary": { "type": "periodic" },
            "initial_condition": {
                "type": "square", "start": 0.1, "end": 0.3, "low": 0.0, "high": 1.0
            }
        }"#;
        let param = SolverParamParser::parse_str(json).unwrap();
        assert_eq!(param.scheme, Scheme::Superbee);
        assert_eq!(param.cell_num, 100);
        assert_eq!(param.boundary, BoundaryCondition::Periodic);
        assert!(param.output.is_none());
    }

    #[test]
    fn test_unknown_scheme_is_rejected() {
        let json = r#"{ "scheme": "weno5", "cell_num": 10 }"#;
        assert!(SolverParamParser::parse_str(json).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(SolverParamParser::parse("does/not/exist.json").is_err());
    }
}
