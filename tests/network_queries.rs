use metrograph::{
    DisruptionPolicy, Error, GraphConfig, MetroLoader, QueryConfig, SegmentWeight,
    SharedTransitGraph, StationId, TransitGraph,
};

fn sid(id: u32) -> StationId {
    StationId::new(id)
}

fn ids(raw: &[u32]) -> Vec<StationId> {
    raw.iter().copied().map(sid).collect()
}

fn three_station_graph(config: GraphConfig) -> TransitGraph {
    let mut graph = TransitGraph::new(config);
    for id in 1..=3 {
        graph.insert_station(sid(id));
    }
    graph.connect(sid(1), sid(2), 60).unwrap();
    graph.connect(sid(2), sid(3), -1).unwrap();
    graph
}

#[test]
fn test_transfer_uses_walking_time() {
    for config in [GraphConfig::directed(), GraphConfig::undirected()] {
        let graph = three_station_graph(config);
        let route = graph.find_shortest_path(sid(1), sid(3)).unwrap();
        assert_eq!(route.stations, ids(&[1, 2, 3]));
        assert_eq!(route.total_seconds, 150);

        // 存储的权重仍是哨兵值
        let seg = graph.get_edge_between(sid(2), sid(3)).unwrap().unwrap();
        assert_eq!(seg.weight().raw(), -1);
    }
}

#[test]
fn test_line_down_without_alternative() {
    for config in [GraphConfig::directed(), GraphConfig::undirected()] {
        let mut graph = three_station_graph(config);
        let stations_before = graph.stations().to_vec();

        let route = graph
            .find_shortest_path_with_line_down(sid(1), sid(3), sid(2))
            .unwrap();
        assert!(route.is_empty());

        let seg = graph.get_edge_between(sid(1), sid(2)).unwrap().unwrap();
        assert_eq!(seg.weight(), SegmentWeight::Travel(60));
        assert_eq!(graph.stations(), stations_before.as_slice());
        assert_eq!(graph.segment_count(), 2);

        // 恢复后普通查询不受影响
        let route = graph.find_shortest_path(sid(1), sid(3)).unwrap();
        assert_eq!(route.total_seconds, 150);
    }
}

#[test]
fn test_same_line_skips_transfer_neighbor() {
    let mut graph = TransitGraph::directed();
    for id in 1..=4 {
        graph.insert_station(sid(id));
    }
    graph.connect(sid(2), sid(3), -1).unwrap();
    graph.connect(sid(2), sid(4), 30).unwrap();

    assert_eq!(graph.get_stations_on_same_line(sid(2)).unwrap(), ids(&[2, 4]));
    assert!(matches!(
        graph.get_stations_on_same_line(sid(9)),
        Err(Error::StationNotFound(_))
    ));
}

#[test]
fn test_insert_then_get_edge() {
    let mut graph = TransitGraph::undirected();
    let a = graph.insert_station(sid(10));
    let b = graph.insert_station(sid(20));
    graph.insert_edge(a, b, SegmentWeight::Travel(45)).unwrap();

    assert_eq!(graph.get_edge(a, b).unwrap().weight(), SegmentWeight::Travel(45));
    assert_eq!(graph.get_edge(b, a).unwrap().weight(), SegmentWeight::Travel(45));

    let count = graph.segment_count();
    assert!(matches!(
        graph.insert_edge(a, b, SegmentWeight::Travel(1)),
        Err(Error::DuplicateEdge { .. })
    ));
    assert_eq!(graph.segment_count(), count);
}

const METRO: &str = "\
8 12
0 Gare A1
1 Gare A2
2 Gare A3
3 Gare B1
4 Gare B2
5 Gare B3
6 Gare C1
7 Gare C2
$
0 1 60
1 0 60
1 2 60
2 1 60
3 4 40
4 3 40
4 5 40
5 4 40
0 3 -1
3 0 -1
2 5 -1
5 2 -1
";

#[test]
fn test_loaded_network_queries() {
    let (mut graph, stats) = MetroLoader::new().load_str(METRO).unwrap();
    assert_eq!(stats.stations, 8);
    assert_eq!(stats.segments, 12);

    assert_eq!(graph.get_stations_on_same_line(sid(1)).unwrap(), ids(&[1, 0, 2]));
    assert_eq!(graph.get_stations_on_same_line(sid(6)).unwrap(), ids(&[6]));

    let route = graph.find_shortest_path(sid(0), sid(2)).unwrap();
    assert_eq!(route.stations, ids(&[0, 1, 2]));
    assert_eq!(route.total_seconds, 120);

    // C 线与其他线路不相连
    assert!(graph.find_shortest_path(sid(0), sid(7)).unwrap().is_empty());

    // 只有 1 停运时可经 B 线绕行；整条 A 线停运时 0 与 2 都被隔离
    let config = QueryConfig::default().with_policy(DisruptionPolicy::SingleStation);
    let shared = SharedTransitGraph::new(graph.clone());
    let detour = shared
        .find_shortest_path_with_line_down(sid(0), sid(2), sid(1), &config)
        .unwrap();
    assert_eq!(detour.stations, ids(&[0, 3, 4, 5, 2]));
    assert_eq!(detour.total_seconds, 90 + 40 + 40 + 90);

    let route = graph
        .find_shortest_path_with_line_down(sid(0), sid(2), sid(1))
        .unwrap();
    assert!(route.is_empty());

    let route = graph
        .find_shortest_path_with_line_down(sid(3), sid(5), sid(0))
        .unwrap();
    assert_eq!(route.stations, ids(&[3, 4, 5]));
}
