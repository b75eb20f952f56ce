//! Agent configuration schema, defaults, and the single-pass assembler.
//!
//! Construction is one linear pass over the fixed schema: one typed read per
//! field, placeholder resolution for the collector IP fields, clamping for
//! the call-stack depth, and filter compilation for the two filter specs.
//! Assembly never fails; malformed input degrades to per-field defaults.

use crate::filter::StringFilter;
use crate::props::RawProperties;
use crate::reader::PropertyReader;
use crate::resolver::PlaceholderResolver;
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// Default collector address used by every collector IP field.
pub const DEFAULT_IP: &str = "127.0.0.1";

const DEFAULT_AGENT_INFO_SEND_RETRY_INTERVAL_MS: i64 = 5 * 60 * 1000;

/// Dump strategy for captured payloads (cookies, request entities).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpType {
    /// Dump on every sampled invocation.
    Always,
    /// Dump only when the invocation raised an error.
    Exception,
}

impl fmt::Display for DumpType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => formatter.write_str("ALWAYS"),
            Self::Exception => formatter.write_str("EXCEPTION"),
        }
    }
}

/// Typed, validated agent configuration.
///
/// Read-only after construction, shared across consumer threads. The two
/// runtime-detection fields (`application_server_type`, `disabled_plugins`)
/// are the single exception: they live in interior-mutability cells and may
/// be overwritten later by the server-type detector. Callers are expected to
/// write them from a single thread.
#[derive(Debug)]
pub struct AgentConfig {
    properties: RawProperties,

    /// Master instrumentation switch.
    pub profile_enable: bool,

    /// Span collector address.
    pub collector_span_server_ip: String,
    /// Span collector port.
    pub collector_span_server_port: i32,
    /// Stat collector address.
    pub collector_stat_server_ip: String,
    /// Stat collector port.
    pub collector_stat_server_port: i32,
    /// TCP command channel address.
    pub collector_tcp_server_ip: String,
    /// TCP command channel port.
    pub collector_tcp_server_port: i32,

    /// Span sender write queue capacity.
    pub span_data_sender_write_queue_size: i32,
    /// Span sender socket send buffer size in bytes.
    pub span_data_sender_socket_send_buffer_size: i32,
    /// Span sender socket timeout in milliseconds.
    pub span_data_sender_socket_timeout: i32,
    /// Span sender chunk size in bytes.
    pub span_data_sender_chunk_size: i32,

    /// Stat sender write queue capacity.
    pub stat_data_sender_write_queue_size: i32,
    /// Stat sender socket send buffer size in bytes.
    pub stat_data_sender_socket_send_buffer_size: i32,
    /// Stat sender socket timeout in milliseconds.
    pub stat_data_sender_socket_timeout: i32,
    /// Stat sender chunk size in bytes.
    pub stat_data_sender_chunk_size: i32,

    /// Whether the TCP sender accepts collector commands.
    pub tcp_data_sender_command_accept_enable: bool,

    /// Whether active-thread tracing is enabled.
    pub trace_agent_active_thread: bool,

    /// Maximum recorded call-stack depth, clamped to at least 2 at read time.
    // Declared default is 512; the absent-key read default is 64, and 64 is
    // what governs when the properties file has no entry.
    pub call_stack_max_depth: i32,

    /// JDBC SQL cache capacity.
    pub jdbc_sql_cache_size: i32,

    /// Whether the agent header is hidden from Tomcat responses.
    pub tomcat_hide_agent_header: bool,
    /// Request paths excluded from Tomcat instrumentation.
    pub tomcat_exclude_url_filter: StringFilter,
    /// Whether GET parameters are captured.
    pub tomcat_profile_get_parameter: bool,
    /// Whether POST parameters are captured.
    pub tomcat_profile_post_parameter: bool,

    /// Apache HttpClient 3 instrumentation switch.
    pub apache_http_client3_profile: bool,
    /// Whether HttpClient 3 cookies are captured.
    pub apache_http_client3_profile_cookie: bool,
    /// HttpClient 3 cookie dump strategy.
    pub apache_http_client3_profile_cookie_dump_type: DumpType,
    /// HttpClient 3 cookie dump sampling rate.
    pub apache_http_client3_profile_cookie_sampling_rate: i32,
    /// Whether HttpClient 3 request entities are captured.
    pub apache_http_client3_profile_entity: bool,
    /// HttpClient 3 entity dump strategy.
    pub apache_http_client3_profile_entity_dump_type: DumpType,
    /// HttpClient 3 entity dump sampling rate.
    pub apache_http_client3_profile_entity_sampling_rate: i32,
    /// Whether HttpClient 3 socket I/O is traced.
    pub apache_http_client3_profile_io: bool,

    /// Apache HttpClient 4 instrumentation switch.
    pub apache_http_client4_profile: bool,
    /// Whether HttpClient 4 cookies are captured.
    pub apache_http_client4_profile_cookie: bool,
    /// HttpClient 4 cookie dump strategy.
    pub apache_http_client4_profile_cookie_dump_type: DumpType,
    /// HttpClient 4 cookie dump sampling rate.
    pub apache_http_client4_profile_cookie_sampling_rate: i32,
    /// Whether HttpClient 4 request entities are captured.
    pub apache_http_client4_profile_entity: bool,
    /// HttpClient 4 entity dump strategy.
    pub apache_http_client4_profile_entity_dump_type: DumpType,
    /// HttpClient 4 entity dump sampling rate.
    pub apache_http_client4_profile_entity_sampling_rate: i32,
    /// Whether HttpClient 4 response status codes are recorded.
    pub apache_http_client4_profile_status_code: bool,
    /// Whether HttpClient 4 socket I/O is traced.
    pub apache_http_client4_profile_io: bool,

    /// Apache async (NIO) HttpClient 4 instrumentation switch.
    pub apache_nio_http_client4_profile: bool,

    /// Whether log4j log records carry transaction info.
    pub log4j_logging_transaction_info: bool,
    /// Whether logback log records carry transaction info.
    pub logback_logging_transaction_info: bool,

    /// Redis instrumentation switch.
    pub redis: bool,
    /// Redis pipeline instrumentation switch.
    pub redis_pipeline: bool,

    /// iBATIS instrumentation switch.
    pub ibatis: bool,
    /// MyBatis instrumentation switch.
    pub mybatis: bool,

    /// Whether trace sampling is enabled.
    pub sampling_enable: bool,
    /// Sampling rate denominator (1 of N transactions is traced).
    pub sampling_rate: i32,

    /// Whether span I/O buffering is enabled.
    pub io_buffering_enable: bool,
    /// Span I/O buffer capacity.
    pub io_buffering_buffer_size: i32,

    /// JVM metric collection interval in milliseconds.
    pub profile_jvm_collect_interval: i32,

    /// Retry interval for agent-info registration in milliseconds.
    pub agent_info_send_retry_interval: i64,

    /// Classes included for call-stack profiling.
    pub profilable_class_filter: StringFilter,

    /// Application-type detector ordering.
    pub application_type_detect_order: Vec<String>,

    /// Whether interceptor errors propagate into the application.
    pub propagate_interceptor_exception: bool,

    // Runtime-detection cells; written after construction by the server-type
    // detector, read by everyone else.
    application_server_type: RwLock<Option<String>>,
    disabled_plugins: RwLock<Vec<String>>,
}

impl Default for AgentConfig {
    /// Configuration with every field at its declared default, backed by an
    /// empty mapping. Note this differs from assembling an empty properties
    /// file: declared and read-time defaults disagree for a few fields (see
    /// `from_properties`).
    fn default() -> Self {
        Self {
            properties: RawProperties::new(),
            profile_enable: false,
            collector_span_server_ip: DEFAULT_IP.to_string(),
            collector_span_server_port: 9996,
            collector_stat_server_ip: DEFAULT_IP.to_string(),
            collector_stat_server_port: 9995,
            collector_tcp_server_ip: DEFAULT_IP.to_string(),
            collector_tcp_server_port: 9994,
            span_data_sender_write_queue_size: 1024 * 5,
            span_data_sender_socket_send_buffer_size: 1024 * 64 * 16,
            span_data_sender_socket_timeout: 1000 * 3,
            span_data_sender_chunk_size: 1024 * 16,
            stat_data_sender_write_queue_size: 1024 * 5,
            stat_data_sender_socket_send_buffer_size: 1024 * 64 * 16,
            stat_data_sender_socket_timeout: 1000 * 3,
            stat_data_sender_chunk_size: 1024 * 16,
            tcp_data_sender_command_accept_enable: false,
            trace_agent_active_thread: true,
            call_stack_max_depth: 512,
            jdbc_sql_cache_size: 1024,
            tomcat_hide_agent_header: true,
            tomcat_exclude_url_filter: StringFilter::Skip,
            tomcat_profile_get_parameter: false,
            tomcat_profile_post_parameter: false,
            apache_http_client3_profile: true,
            apache_http_client3_profile_cookie: false,
            apache_http_client3_profile_cookie_dump_type: DumpType::Exception,
            apache_http_client3_profile_cookie_sampling_rate: 1,
            apache_http_client3_profile_entity: false,
            apache_http_client3_profile_entity_dump_type: DumpType::Exception,
            apache_http_client3_profile_entity_sampling_rate: 1,
            apache_http_client3_profile_io: true,
            apache_http_client4_profile: true,
            apache_http_client4_profile_cookie: false,
            apache_http_client4_profile_cookie_dump_type: DumpType::Exception,
            apache_http_client4_profile_cookie_sampling_rate: 1,
            apache_http_client4_profile_entity: false,
            apache_http_client4_profile_entity_dump_type: DumpType::Exception,
            apache_http_client4_profile_entity_sampling_rate: 1,
            apache_http_client4_profile_status_code: true,
            apache_http_client4_profile_io: true,
            apache_nio_http_client4_profile: true,
            log4j_logging_transaction_info: false,
            logback_logging_transaction_info: false,
            redis: true,
            redis_pipeline: true,
            ibatis: true,
            mybatis: true,
            sampling_enable: true,
            sampling_rate: 1,
            io_buffering_enable: false,
            io_buffering_buffer_size: 0,
            profile_jvm_collect_interval: 0,
            agent_info_send_retry_interval: DEFAULT_AGENT_INFO_SEND_RETRY_INTERVAL_MS,
            profilable_class_filter: StringFilter::Skip,
            application_type_detect_order: Vec::new(),
            propagate_interceptor_exception: false,
            application_server_type: RwLock::new(None),
            disabled_plugins: RwLock::new(Vec::new()),
        }
    }
}

impl AgentConfig {
    /// Assemble the configuration from an already-loaded raw mapping.
    ///
    /// One typed read per schema field; every malformed or missing value
    /// degrades to that field's read-time default, so assembly itself never
    /// fails. The mapping is retained for later ad-hoc reads.
    #[must_use]
    pub fn from_properties(properties: RawProperties) -> Self {
        let placeholder = PlaceholderResolver;
        let reader = PropertyReader::new(&properties);

        let profile_enable = reader.read_bool("profiler.enable", true);

        let collector_span_server_ip =
            reader.read_string_with("profiler.collector.span.ip", DEFAULT_IP, &placeholder);
        let collector_span_server_port = reader.read_int("profiler.collector.span.port", 9996);

        let collector_stat_server_ip =
            reader.read_string_with("profiler.collector.stat.ip", DEFAULT_IP, &placeholder);
        let collector_stat_server_port = reader.read_int("profiler.collector.stat.port", 9995);

        let collector_tcp_server_ip =
            reader.read_string_with("profiler.collector.tcp.ip", DEFAULT_IP, &placeholder);
        let collector_tcp_server_port = reader.read_int("profiler.collector.tcp.port", 9994);

        let span_data_sender_write_queue_size =
            reader.read_int("profiler.spandatasender.write.queue.size", 1024 * 5);
        let span_data_sender_socket_send_buffer_size =
            reader.read_int("profiler.spandatasender.socket.sendbuffersize", 1024 * 64 * 16);
        let span_data_sender_socket_timeout =
            reader.read_int("profiler.spandatasender.socket.timeout", 1000 * 3);
        let span_data_sender_chunk_size =
            reader.read_int("profiler.spandatasender.chunk.size", 1024 * 16);

        let stat_data_sender_write_queue_size =
            reader.read_int("profiler.statdatasender.write.queue.size", 1024 * 5);
        let stat_data_sender_socket_send_buffer_size =
            reader.read_int("profiler.statdatasender.socket.sendbuffersize", 1024 * 64 * 16);
        let stat_data_sender_socket_timeout =
            reader.read_int("profiler.statdatasender.socket.timeout", 1000 * 3);
        let stat_data_sender_chunk_size =
            reader.read_int("profiler.statdatasender.chunk.size", 1024 * 16);

        let tcp_data_sender_command_accept_enable =
            reader.read_bool("profiler.tcpdatasender.command.accept.enable", false);

        let trace_agent_active_thread = reader.read_bool("profiler.agent.activethread", true);

        let mut call_stack_max_depth = reader.read_int("profiler.callstack.max.depth", 64);
        if call_stack_max_depth < 2 {
            call_stack_max_depth = 2;
        }

        let jdbc_sql_cache_size = reader.read_int("profiler.jdbc.sqlcachesize", 1024);

        let tomcat_hide_agent_header =
            reader.read_bool("profiler.tomcat.hideagentheader", true);
        let tomcat_exclude_url = reader.read_string("profiler.tomcat.excludeurl", "");
        let tomcat_exclude_url_filter = if tomcat_exclude_url.is_empty() {
            StringFilter::Skip
        } else {
            StringFilter::url_patterns(&tomcat_exclude_url)
        };
        let tomcat_profile_get_parameter = reader.read_bool("profiler.tomcat.getparameter", false);
        let tomcat_profile_post_parameter =
            reader.read_bool("profiler.tomcat.postparameter", false);

        let apache_http_client3_profile = reader.read_bool("profiler.apache.httpclient3", true);
        let apache_http_client3_profile_cookie =
            reader.read_bool("profiler.apache.httpclient3.cookie", false);
        let apache_http_client3_profile_cookie_dump_type =
            reader.read_dump_type("profiler.apache.httpclient3.cookie.dumptype", DumpType::Exception);
        let apache_http_client3_profile_cookie_sampling_rate =
            reader.read_int("profiler.apache.httpclient3.cookie.sampling.rate", 1);
        let apache_http_client3_profile_entity =
            reader.read_bool("profiler.apache.httpclient3.entity", false);
        let apache_http_client3_profile_entity_dump_type =
            reader.read_dump_type("profiler.apache.httpclient3.entity.dumptype", DumpType::Exception);
        let apache_http_client3_profile_entity_sampling_rate =
            reader.read_int("profiler.apache.httpclient3.entity.sampling.rate", 1);
        let apache_http_client3_profile_io = reader.read_bool("profiler.apache.httpclient3.io", true);

        let apache_http_client4_profile = reader.read_bool("profiler.apache.httpclient4", true);
        let apache_http_client4_profile_cookie =
            reader.read_bool("profiler.apache.httpclient4.cookie", false);
        let apache_http_client4_profile_cookie_dump_type =
            reader.read_dump_type("profiler.apache.httpclient4.cookie.dumptype", DumpType::Exception);
        let apache_http_client4_profile_cookie_sampling_rate =
            reader.read_int("profiler.apache.httpclient4.cookie.sampling.rate", 1);
        let apache_http_client4_profile_entity =
            reader.read_bool("profiler.apache.httpclient4.entity", false);
        let apache_http_client4_profile_entity_dump_type =
            reader.read_dump_type("profiler.apache.httpclient4.entity.dumptype", DumpType::Exception);
        let apache_http_client4_profile_entity_sampling_rate =
            reader.read_int("profiler.apache.httpclient4.entity.sampling.rate", 1);
        let apache_http_client4_profile_status_code =
            reader.read_bool("profiler.apache.httpclient4.entity.statuscode", true);
        let apache_http_client4_profile_io = reader.read_bool("profiler.apache.httpclient4.io", true);

        let apache_nio_http_client4_profile =
            reader.read_bool("profiler.apache.nio.httpclient4", true);

        let log4j_logging_transaction_info =
            reader.read_bool("profiler.log4j.logging.transactioninfo", false);
        let logback_logging_transaction_info =
            reader.read_bool("profiler.logback.logging.transactioninfo", false);

        let redis = reader.read_bool("profiler.redis", true);
        let redis_pipeline = reader.read_bool("profiler.redis.pipeline", true);

        let ibatis = reader.read_bool("profiler.orm.ibatis", true);
        let mybatis = reader.read_bool("profiler.orm.mybatis", true);

        let sampling_enable = reader.read_bool("profiler.sampling.enable", true);
        let sampling_rate = reader.read_int("profiler.sampling.rate", 1);

        let io_buffering_enable = reader.read_bool("profiler.io.buffering.enable", true);
        let io_buffering_buffer_size = reader.read_int("profiler.io.buffering.buffersize", 20);

        let profile_jvm_collect_interval = reader.read_int("profiler.jvm.collect.interval", 1000);

        let agent_info_send_retry_interval = reader.read_long(
            "profiler.agentInfo.send.retry.interval",
            DEFAULT_AGENT_INFO_SEND_RETRY_INTERVAL_MS,
        );

        let application_server_type = reader.read_opt_string("profiler.applicationservertype");

        let application_type_detect_order = reader.read_list("profiler.type.detect.order");
        let disabled_plugins = reader.read_list("profiler.plugin.disable");

        let profilable_class = reader.read_string("profiler.include", "");
        let profilable_class_filter = if profilable_class.is_empty() {
            StringFilter::Skip
        } else {
            StringFilter::class_names(&profilable_class)
        };

        let propagate_interceptor_exception =
            reader.read_bool("profiler.interceptor.exception.propagate", false);

        tracing::info!("configuration loaded successfully.");

        Self {
            properties,
            profile_enable,
            collector_span_server_ip,
            collector_span_server_port,
            collector_stat_server_ip,
            collector_stat_server_port,
            collector_tcp_server_ip,
            collector_tcp_server_port,
            span_data_sender_write_queue_size,
            span_data_sender_socket_send_buffer_size,
            span_data_sender_socket_timeout,
            span_data_sender_chunk_size,
            stat_data_sender_write_queue_size,
            stat_data_sender_socket_send_buffer_size,
            stat_data_sender_socket_timeout,
            stat_data_sender_chunk_size,
            tcp_data_sender_command_accept_enable,
            trace_agent_active_thread,
            call_stack_max_depth,
            jdbc_sql_cache_size,
            tomcat_hide_agent_header,
            tomcat_exclude_url_filter,
            tomcat_profile_get_parameter,
            tomcat_profile_post_parameter,
            apache_http_client3_profile,
            apache_http_client3_profile_cookie,
            apache_http_client3_profile_cookie_dump_type,
            apache_http_client3_profile_cookie_sampling_rate,
            apache_http_client3_profile_entity,
            apache_http_client3_profile_entity_dump_type,
            apache_http_client3_profile_entity_sampling_rate,
            apache_http_client3_profile_io,
            apache_http_client4_profile,
            apache_http_client4_profile_cookie,
            apache_http_client4_profile_cookie_dump_type,
            apache_http_client4_profile_cookie_sampling_rate,
            apache_http_client4_profile_entity,
            apache_http_client4_profile_entity_dump_type,
            apache_http_client4_profile_entity_sampling_rate,
            apache_http_client4_profile_status_code,
            apache_http_client4_profile_io,
            apache_nio_http_client4_profile,
            log4j_logging_transaction_info,
            logback_logging_transaction_info,
            redis,
            redis_pipeline,
            ibatis,
            mybatis,
            sampling_enable,
            sampling_rate,
            io_buffering_enable,
            io_buffering_buffer_size,
            profile_jvm_collect_interval,
            agent_info_send_retry_interval,
            profilable_class_filter,
            application_type_detect_order,
            propagate_interceptor_exception,
            application_server_type: RwLock::new(application_server_type),
            disabled_plugins: RwLock::new(disabled_plugins),
        }
    }

    /// Typed-read access to the retained raw mapping.
    #[must_use]
    pub const fn reader(&self) -> PropertyReader<'_> {
        PropertyReader::new(&self.properties)
    }

    /// Borrow the retained raw mapping.
    #[must_use]
    pub const fn raw_properties(&self) -> &RawProperties {
        &self.properties
    }

    /// Current application-server-type label, if detected or configured.
    #[must_use]
    pub fn application_server_type(&self) -> Option<String> {
        read_cell(&self.application_server_type).clone()
    }

    /// Overwrite the application-server-type label (runtime detection).
    pub fn set_application_server_type(&self, server_type: impl Into<String>) {
        *write_cell(&self.application_server_type) = Some(server_type.into());
    }

    /// Currently disabled plugin names.
    #[must_use]
    pub fn disabled_plugins(&self) -> Vec<String> {
        read_cell(&self.disabled_plugins).clone()
    }

    /// Overwrite the disabled-plugin list (runtime detection).
    pub fn set_disabled_plugins(&self, plugins: Vec<String>) {
        *write_cell(&self.disabled_plugins) = plugins;
    }
}

fn read_cell<T>(cell: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    cell.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_cell<T>(cell: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    cell.write().unwrap_or_else(PoisonError::into_inner)
}

impl fmt::Display for AgentConfig {
    /// Diagnostic dump of every field's current value, for startup logging.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "AgentConfig{{profile_enable={}", self.profile_enable)?;
        write!(
            formatter,
            ", collector_span_server_ip={}, collector_span_server_port={}",
            self.collector_span_server_ip, self.collector_span_server_port
        )?;
        write!(
            formatter,
            ", collector_stat_server_ip={}, collector_stat_server_port={}",
            self.collector_stat_server_ip, self.collector_stat_server_port
        )?;
        write!(
            formatter,
            ", collector_tcp_server_ip={}, collector_tcp_server_port={}",
            self.collector_tcp_server_ip, self.collector_tcp_server_port
        )?;
        write!(
            formatter,
            ", span_data_sender_write_queue_size={}, span_data_sender_socket_send_buffer_size={}, span_data_sender_socket_timeout={}, span_data_sender_chunk_size={}",
            self.span_data_sender_write_queue_size,
            self.span_data_sender_socket_send_buffer_size,
            self.span_data_sender_socket_timeout,
            self.span_data_sender_chunk_size
        )?;
        write!(
            formatter,
            ", stat_data_sender_write_queue_size={}, stat_data_sender_socket_send_buffer_size={}, stat_data_sender_socket_timeout={}, stat_data_sender_chunk_size={}",
            self.stat_data_sender_write_queue_size,
            self.stat_data_sender_socket_send_buffer_size,
            self.stat_data_sender_socket_timeout,
            self.stat_data_sender_chunk_size
        )?;
        write!(
            formatter,
            ", tcp_data_sender_command_accept_enable={}, trace_agent_active_thread={}",
            self.tcp_data_sender_command_accept_enable, self.trace_agent_active_thread
        )?;
        write!(
            formatter,
            ", call_stack_max_depth={}, jdbc_sql_cache_size={}",
            self.call_stack_max_depth, self.jdbc_sql_cache_size
        )?;
        write!(
            formatter,
            ", tomcat_hide_agent_header={}, tomcat_exclude_url_filter={}, tomcat_profile_get_parameter={}, tomcat_profile_post_parameter={}",
            self.tomcat_hide_agent_header,
            self.tomcat_exclude_url_filter,
            self.tomcat_profile_get_parameter,
            self.tomcat_profile_post_parameter
        )?;
        write!(
            formatter,
            ", apache_http_client3_profile={}, apache_http_client3_profile_cookie={}, apache_http_client3_profile_cookie_dump_type={}, apache_http_client3_profile_cookie_sampling_rate={}",
            self.apache_http_client3_profile,
            self.apache_http_client3_profile_cookie,
            self.apache_http_client3_profile_cookie_dump_type,
            self.apache_http_client3_profile_cookie_sampling_rate
        )?;
        write!(
            formatter,
            ", apache_http_client3_profile_entity={}, apache_http_client3_profile_entity_dump_type={}, apache_http_client3_profile_entity_sampling_rate={}, apache_http_client3_profile_io={}",
            self.apache_http_client3_profile_entity,
            self.apache_http_client3_profile_entity_dump_type,
            self.apache_http_client3_profile_entity_sampling_rate,
            self.apache_http_client3_profile_io
        )?;
        write!(
            formatter,
            ", apache_http_client4_profile={}, apache_http_client4_profile_cookie={}, apache_http_client4_profile_cookie_dump_type={}, apache_http_client4_profile_cookie_sampling_rate={}",
            self.apache_http_client4_profile,
            self.apache_http_client4_profile_cookie,
            self.apache_http_client4_profile_cookie_dump_type,
            self.apache_http_client4_profile_cookie_sampling_rate
        )?;
        write!(
            formatter,
            ", apache_http_client4_profile_entity={}, apache_http_client4_profile_entity_dump_type={}, apache_http_client4_profile_entity_sampling_rate={}, apache_http_client4_profile_status_code={}, apache_http_client4_profile_io={}",
            self.apache_http_client4_profile_entity,
            self.apache_http_client4_profile_entity_dump_type,
            self.apache_http_client4_profile_entity_sampling_rate,
            self.apache_http_client4_profile_status_code,
            self.apache_http_client4_profile_io
        )?;
        write!(
            formatter,
            ", apache_nio_http_client4_profile={}",
            self.apache_nio_http_client4_profile
        )?;
        write!(
            formatter,
            ", log4j_logging_transaction_info={}, logback_logging_transaction_info={}",
            self.log4j_logging_transaction_info, self.logback_logging_transaction_info
        )?;
        write!(
            formatter,
            ", redis={}, redis_pipeline={}, ibatis={}, mybatis={}",
            self.redis, self.redis_pipeline, self.ibatis, self.mybatis
        )?;
        write!(
            formatter,
            ", sampling_enable={}, sampling_rate={}",
            self.sampling_enable, self.sampling_rate
        )?;
        write!(
            formatter,
            ", io_buffering_enable={}, io_buffering_buffer_size={}",
            self.io_buffering_enable, self.io_buffering_buffer_size
        )?;
        write!(
            formatter,
            ", profile_jvm_collect_interval={}, agent_info_send_retry_interval={}",
            self.profile_jvm_collect_interval, self.agent_info_send_retry_interval
        )?;
        write!(
            formatter,
            ", profilable_class_filter={}",
            self.profilable_class_filter
        )?;
        write!(
            formatter,
            ", application_server_type={:?}, application_type_detect_order={:?}, disabled_plugins={:?}",
            self.application_server_type(),
            self.application_type_detect_order,
            self.disabled_plugins()
        )?;
        write!(
            formatter,
            ", propagate_interceptor_exception={}}}",
            self.propagate_interceptor_exception
        )
    }
}
