use super::*;
use crate::helpers::get_data_reader;
use crate::shortest_path::ShortestPathProblem;
use daa_core::algorithms::shortest_path::bellman_ford;

#[test]
fn can_create_report_with_names() {
    let instance = get_data_reader("shortest_path/reference.txt").read_shortest_path().unwrap();
    let paths = bellman_ford(&instance.graph, instance.source).unwrap();

    let report = ShortestPathReport::new(&paths, &instance.graph);

    assert_eq!(report.source, "0");
    assert_eq!(report.status, 1);
    assert_eq!(report.cycle, None);
    assert_eq!(report.vertices.len(), 8);
    assert_eq!(
        report.vertices[3],
        VertexReport {
            name: "3".to_string(),
            distance: Some(17),
            parent: Some("2".to_string()),
            route: Some(vec!["3".to_string(), "2".to_string(), "5".to_string(), "4".to_string(), "0".to_string()]),
        }
    );
    assert_eq!(report.vertices[0].route, Some(vec!["0".to_string()]));
}

#[test]
fn can_create_report_with_negative_cycle() {
    let instance = get_data_reader("shortest_path/negative_cycle.txt").read_shortest_path().unwrap();
    let paths = bellman_ford(&instance.graph, instance.source).unwrap();

    let report = ShortestPathReport::new(&paths, &instance.graph);

    assert_eq!(report.status, 0);
    assert!(report.vertices.is_empty());
    let mut cycle = report.cycle.expect("no cycle");
    cycle.sort();
    assert_eq!(cycle, vec!["a", "b", "c"]);
}

#[test]
fn can_report_unreachable_vertex() {
    let instance = "3 1\ns a b\ns a 2".to_string().read_shortest_path().unwrap();
    let paths = bellman_ford(&instance.graph, instance.source).unwrap();

    let report = ShortestPathReport::new(&paths, &instance.graph);

    assert_eq!(
        report.vertices[2],
        VertexReport { name: "b".to_string(), distance: None, parent: None, route: None }
    );
}

#[test]
fn can_serialize_report() {
    let instance = "2 1\ns a\ns a -2".to_string().read_shortest_path().unwrap();
    let paths = bellman_ford(&instance.graph, instance.source).unwrap();

    let json = serde_json::to_string(&ShortestPathReport::new(&paths, &instance.graph)).unwrap();

    assert_eq!(
        json,
        r#"{"source":"s","status":1,"vertices":[{"name":"s","distance":0,"parent":null,"route":["s"]},{"name":"a","distance":-2,"parent":"s","route":["a","s"]}]}"#
    );
}
