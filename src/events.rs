//! Closed enumeration of instrumented operation categories.
//!
//! Every instrumented call site names exactly one variant; adding a new
//! instrumentation point means adding a new variant here. Wire names are
//! stable snake_case strings and round-trip through [`EventType::from_name`].

use serde::{Serialize, Serializer};

/// Category of the instrumented operation that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    // Key-value storage
    PrefsPut,
    PrefsGet,
    ValuesPut,
    ValuesGet,
    // Relational storage
    DbInsert,
    DbDelete,
    DbQuery,
    DbCreate,
    // Dynamic code loading
    DexLoaderInit,
    PathLoaderInit,
    DexFileLoad,
    DexFileOpen,
    DexClassLoad,
    NativeLibraryFind,
    NativeLibraryLoad,
    // Cryptography
    MacFinal,
    CipherUpdate,
    CipherFinal,
    KeySpecInit,
    // Encoding
    Base64Encode,
    Base64EncodeToString,
    Base64Decode,
    // Telephony identity
    DeviceIdGet,
    SubscriberIdGet,
    Line1NumberGet,
    SimOperatorGet,
    NetworkOperatorGet,
    CellLocationGet,
    PhoneTypeGet,
    NetworkTypeGet,
    CallStateGet,
    PhoneStateListen,
    // Messaging
    SmsSendText,
    SmsSendMultipart,
    SmsSendData,
    CallPhone,
    // Process and runtime
    ProcessExec,
    RuntimeExec,
    ReflectInvoke,
    DebuggerCheck,
    ProcessKill,
    BackgroundProcessesKill,
    // System queries
    InstalledPackagesGet,
    RunningTasksGet,
    RunningProcessesGet,
    AccountsGet,
    MacAddressGet,
    SettingsGet,
    // Location
    LastKnownLocationGet,
    LatitudeGet,
    LongitudeGet,
    // Media capture
    AudioRecordStart,
    MediaRecorderStart,
    // Web views
    WebViewLoadUrl,
    WebViewAddJsInterface,
    WebViewDebugEnable,
    // Network
    UrlOpenConnection,
    SocketConnect,
    SocketSend,
    SocketRecv,
    SocketClose,
    HttpExecute,
    // Files
    FileExists,
    FileRead,
    FileWrite,
    AssetOpen,
    // Application lifecycle
    ActivityCreate,
    ActivityStart,
    ServiceCreate,
    ServiceStart,
    BroadcastSend,
    BroadcastReceive,
    WakeLockAcquire,
    NotificationPost,
    ClipboardRead,
    // Test probe
    Probe,
}

impl EventType {
    /// Every variant, in declaration order. Used by name round-trip tests
    /// and by tooling that enumerates the instrumentation surface.
    pub const ALL: &'static [EventType] = &[
        EventType::PrefsPut,
        EventType::PrefsGet,
        EventType::ValuesPut,
        EventType::ValuesGet,
        EventType::DbInsert,
        EventType::DbDelete,
        EventType::DbQuery,
        EventType::DbCreate,
        EventType::DexLoaderInit,
        EventType::PathLoaderInit,
        EventType::DexFileLoad,
        EventType::DexFileOpen,
        EventType::DexClassLoad,
        EventType::NativeLibraryFind,
        EventType::NativeLibraryLoad,
        EventType::MacFinal,
        EventType::CipherUpdate,
        EventType::CipherFinal,
        EventType::KeySpecInit,
        EventType::Base64Encode,
        EventType::Base64EncodeToString,
        EventType::Base64Decode,
        EventType::DeviceIdGet,
        EventType::SubscriberIdGet,
        EventType::Line1NumberGet,
        EventType::SimOperatorGet,
        EventType::NetworkOperatorGet,
        EventType::CellLocationGet,
        EventType::PhoneTypeGet,
        EventType::NetworkTypeGet,
        EventType::CallStateGet,
        EventType::PhoneStateListen,
        EventType::SmsSendText,
        EventType::SmsSendMultipart,
        EventType::SmsSendData,
        EventType::CallPhone,
        EventType::ProcessExec,
        EventType::RuntimeExec,
        EventType::ReflectInvoke,
        EventType::DebuggerCheck,
        EventType::ProcessKill,
        EventType::BackgroundProcessesKill,
        EventType::InstalledPackagesGet,
        EventType::RunningTasksGet,
        EventType::RunningProcessesGet,
        EventType::AccountsGet,
        EventType::MacAddressGet,
        EventType::SettingsGet,
        EventType::LastKnownLocationGet,
        EventType::LatitudeGet,
        EventType::LongitudeGet,
        EventType::AudioRecordStart,
        EventType::MediaRecorderStart,
        EventType::WebViewLoadUrl,
        EventType::WebViewAddJsInterface,
        EventType::WebViewDebugEnable,
        EventType::UrlOpenConnection,
        EventType::SocketConnect,
        EventType::SocketSend,
        EventType::SocketRecv,
        EventType::SocketClose,
        EventType::HttpExecute,
        EventType::FileExists,
        EventType::FileRead,
        EventType::FileWrite,
        EventType::AssetOpen,
        EventType::ActivityCreate,
        EventType::ActivityStart,
        EventType::ServiceCreate,
        EventType::ServiceStart,
        EventType::BroadcastSend,
        EventType::BroadcastReceive,
        EventType::WakeLockAcquire,
        EventType::NotificationPost,
        EventType::ClipboardRead,
        EventType::Probe,
    ];

    /// Stable wire name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::PrefsPut => "prefs_put",
            EventType::PrefsGet => "prefs_get",
            EventType::ValuesPut => "values_put",
            EventType::ValuesGet => "values_get",
            EventType::DbInsert => "db_insert",
            EventType::DbDelete => "db_delete",
            EventType::DbQuery => "db_query",
            EventType::DbCreate => "db_create",
            EventType::DexLoaderInit => "dex_loader_init",
            EventType::PathLoaderInit => "path_loader_init",
            EventType::DexFileLoad => "dex_file_load",
            EventType::DexFileOpen => "dex_file_open",
            EventType::DexClassLoad => "dex_class_load",
            EventType::NativeLibraryFind => "native_library_find",
            EventType::NativeLibraryLoad => "native_library_load",
            EventType::MacFinal => "mac_final",
            EventType::CipherUpdate => "cipher_update",
            EventType::CipherFinal => "cipher_final",
            EventType::KeySpecInit => "key_spec_init",
            EventType::Base64Encode => "base64_encode",
            EventType::Base64EncodeToString => "base64_encode_to_string",
            EventType::Base64Decode => "base64_decode",
            EventType::DeviceIdGet => "device_id_get",
            EventType::SubscriberIdGet => "subscriber_id_get",
            EventType::Line1NumberGet => "line1_number_get",
            EventType::SimOperatorGet => "sim_operator_get",
            EventType::NetworkOperatorGet => "network_operator_get",
            EventType::CellLocationGet => "cell_location_get",
            EventType::PhoneTypeGet => "phone_type_get",
            EventType::NetworkTypeGet => "network_type_get",
            EventType::CallStateGet => "call_state_get",
            EventType::PhoneStateListen => "phone_state_listen",
            EventType::SmsSendText => "sms_send_text",
            EventType::SmsSendMultipart => "sms_send_multipart",
            EventType::SmsSendData => "sms_send_data",
            EventType::CallPhone => "call_phone",
            EventType::ProcessExec => "process_exec",
            EventType::RuntimeExec => "runtime_exec",
            EventType::ReflectInvoke => "reflect_invoke",
            EventType::DebuggerCheck => "debugger_check",
            EventType::ProcessKill => "process_kill",
            EventType::BackgroundProcessesKill => "background_processes_kill",
            EventType::InstalledPackagesGet => "installed_packages_get",
            EventType::RunningTasksGet => "running_tasks_get",
            EventType::RunningProcessesGet => "running_processes_get",
            EventType::AccountsGet => "accounts_get",
            EventType::MacAddressGet => "mac_address_get",
            EventType::SettingsGet => "settings_get",
            EventType::LastKnownLocationGet => "last_known_location_get",
            EventType::LatitudeGet => "latitude_get",
            EventType::LongitudeGet => "longitude_get",
            EventType::AudioRecordStart => "audio_record_start",
            EventType::MediaRecorderStart => "media_recorder_start",
            EventType::WebViewLoadUrl => "webview_load_url",
            EventType::WebViewAddJsInterface => "webview_add_js_interface",
            EventType::WebViewDebugEnable => "webview_debug_enable",
            EventType::UrlOpenConnection => "url_open_connection",
            EventType::SocketConnect => "socket_connect",
            EventType::SocketSend => "socket_send",
            EventType::SocketRecv => "socket_recv",
            EventType::SocketClose => "socket_close",
            EventType::HttpExecute => "http_execute",
            EventType::FileExists => "file_exists",
            EventType::FileRead => "file_read",
            EventType::FileWrite => "file_write",
            EventType::AssetOpen => "asset_open",
            EventType::ActivityCreate => "activity_create",
            EventType::ActivityStart => "activity_start",
            EventType::ServiceCreate => "service_create",
            EventType::ServiceStart => "service_start",
            EventType::BroadcastSend => "broadcast_send",
            EventType::BroadcastReceive => "broadcast_receive",
            EventType::WakeLockAcquire => "wake_lock_acquire",
            EventType::NotificationPost => "notification_post",
            EventType::ClipboardRead => "clipboard_read",
            EventType::Probe => "probe",
        }
    }

    /// Resolve a wire name back to its variant. Returns `None` for names
    /// this build does not know, which the dispatch path treats as a no-op.
    pub fn from_name(name: &str) -> Option<EventType> {
        EventType::ALL.iter().copied().find(|t| t.as_str() == name)
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
