//! Integration tests loading and assembling properties-file fixtures.

use std::error::Error;
use std::path::{Path, PathBuf};
use traceprobe_config::{load_agent_config, load_raw_properties, DumpType, DEFAULT_IP};
use traceprobe_shared::ErrorCode;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn valid_fixture_assembles_end_to_end() -> Result<(), Box<dyn Error>> {
    let config = load_agent_config(fixture_path("agent.valid.properties"))?;

    assert!(config.profile_enable);

    // all three collector IPs resolve through the shared placeholder
    assert_eq!(config.collector_span_server_ip, "192.168.0.30");
    assert_eq!(config.collector_stat_server_ip, "192.168.0.30");
    assert_eq!(config.collector_tcp_server_ip, "192.168.0.30");
    assert_eq!(config.collector_span_server_port, 9996);

    assert_eq!(config.span_data_sender_write_queue_size, 8192);
    assert_eq!(config.span_data_sender_socket_timeout, 5000);
    // keys without a fixture entry keep their read-time defaults
    assert_eq!(config.span_data_sender_chunk_size, 1024 * 16);
    assert_eq!(config.stat_data_sender_write_queue_size, 1024 * 5);

    assert_eq!(config.call_stack_max_depth, 128);
    assert_eq!(config.jdbc_sql_cache_size, 2048);

    assert!(!config.tomcat_hide_agent_header);
    assert!(config.tomcat_profile_get_parameter);
    assert!(!config.tomcat_profile_post_parameter);
    assert!(
        config
            .tomcat_exclude_url_filter
            .matches("/monitor/l7check.html")
    );
    assert!(config.tomcat_exclude_url_filter.matches("/static/app.css"));
    assert!(!config.tomcat_exclude_url_filter.matches("/api/orders"));

    assert!(config.apache_http_client4_profile_cookie);
    assert_eq!(
        config.apache_http_client4_profile_cookie_dump_type,
        DumpType::Always
    );
    assert_eq!(config.apache_http_client4_profile_cookie_sampling_rate, 5);

    assert_eq!(config.sampling_rate, 10);
    assert!(config.io_buffering_enable);
    assert_eq!(config.io_buffering_buffer_size, 40);
    assert_eq!(config.profile_jvm_collect_interval, 2000);

    assert!(
        config
            .profilable_class_filter
            .matches("com.example.service.OrderService")
    );
    assert!(config.profilable_class_filter.matches("com.example.Worker"));
    assert!(!config.profilable_class_filter.matches("com.example.Other"));

    assert_eq!(
        config.application_type_detect_order,
        vec!["tomcat", "jetty", "bloc"]
    );
    assert_eq!(config.disabled_plugins(), vec!["redis", "ibatis"]);
    assert_eq!(config.application_server_type(), Some("TOMCAT".to_string()));

    Ok(())
}

#[test]
fn malformed_fixture_degrades_every_field_to_defaults() -> Result<(), Box<dyn Error>> {
    let config = load_agent_config(fixture_path("agent.malformed.properties"))?;

    // "yes" is not the literal "true"
    assert!(!config.profile_enable);
    assert_eq!(config.collector_span_server_port, 9996);
    assert_eq!(config.collector_stat_server_port, 9995);
    // clamp floor
    assert_eq!(config.call_stack_max_depth, 2);
    assert_eq!(
        config.apache_http_client3_profile_cookie_dump_type,
        DumpType::Exception
    );
    assert_eq!(config.agent_info_send_retry_interval, 5 * 60 * 1000);
    assert!(config.tomcat_exclude_url_filter.is_skip());
    assert_eq!(config.sampling_rate, 1);
    // unresolvable placeholder stays verbatim
    assert_eq!(config.collector_span_server_ip, "${collector.host}");

    Ok(())
}

#[test]
fn missing_fixture_reports_not_found() -> Result<(), Box<dyn Error>> {
    let error = load_agent_config(fixture_path("agent.absent.properties"))
        .err()
        .ok_or_else(|| std::io::Error::other("expected a not-found error"))?;
    assert_eq!(
        error.code,
        ErrorCode::new("config", "properties_file_not_found")
    );
    assert!(error.metadata.contains_key("path"));
    Ok(())
}

#[test]
fn raw_load_preserves_separator_and_comment_rules() -> Result<(), Box<dyn Error>> {
    let properties = load_raw_properties(fixture_path("agent.valid.properties"))?;

    assert_eq!(
        properties.get("profiler.applicationservertype"),
        Some("TOMCAT")
    );
    // comment lines never become entries
    assert_eq!(properties.get("# traceprobe agent configuration"), None);
    assert_eq!(properties.get("collector.host"), Some("192.168.0.30"));

    Ok(())
}

#[test]
fn assembled_config_retains_mapping_for_ad_hoc_reads() -> Result<(), Box<dyn Error>> {
    let config = load_agent_config(fixture_path("agent.valid.properties"))?;
    let reader = config.reader();

    assert_eq!(reader.read_int("profiler.jdbc.sqlcachesize", 0), 2048);
    assert_eq!(
        reader.read_string("profiler.collector.span.ip", ""),
        "${collector.host}"
    );
    // the retained mapping holds the pre-resolution value, the field the resolved one
    assert_ne!(config.collector_span_server_ip, DEFAULT_IP);
    assert_eq!(config.collector_span_server_ip, "192.168.0.30");

    Ok(())
}
