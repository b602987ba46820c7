//! Built-in permission taxonomy data.

use super::ProtectionLevel::{self, Dangerous, Normal, Signature, SignatureOrSystem};

/// `(local name, protection level, short label, description)`
pub(crate) static PERMISSIONS: &[(&str, ProtectionLevel, &str, &str)] = &[
    (
        "SEND_SMS",
        Dangerous,
        "send SMS messages",
        "Allows application to send SMS messages. Malicious applications may cost you money by sending messages without your confirmation.",
    ),
    (
        "SEND_SMS_NO_CONFIRMATION",
        SignatureOrSystem,
        "send SMS messages",
        "send SMS messages via the Messaging app with no user input or confirmation",
    ),
    (
        "CALL_PHONE",
        Dangerous,
        "directly call phone numbers",
        "Allows the application to call phone numbers without your intervention. Malicious applications may cause unexpected calls on your phone bill. Note that this does not allow the application to call emergency numbers.",
    ),
    (
        "RECEIVE_SMS",
        Dangerous,
        "receive SMS",
        "Allows application to receive and process SMS messages. Malicious applications may monitor your messages or delete them without showing them to you.",
    ),
    (
        "RECEIVE_MMS",
        Dangerous,
        "receive MMS",
        "Allows application to receive and process MMS messages. Malicious applications may monitor your messages or delete them without showing them to you.",
    ),
    (
        "READ_SMS",
        Dangerous,
        "read SMS or MMS",
        "Allows application to read SMS messages stored on your phone or SIM card. Malicious applications may read your confidential messages.",
    ),
    (
        "WRITE_SMS",
        Normal,
        "edit SMS or MMS",
        "Allows application to write to SMS messages stored on your phone or SIM card. Malicious applications may delete your messages.",
    ),
    (
        "RECEIVE_WAP_PUSH",
        Dangerous,
        "receive WAP",
        "Allows application to receive and process WAP messages. Malicious applications may monitor your messages or delete them without showing them to you.",
    ),
    (
        "READ_CONTACTS",
        Dangerous,
        "read contact data",
        "Allows an application to read all of the contact (address) data stored on your phone. Malicious applications can use this to send your data to other people.",
    ),
    (
        "WRITE_CONTACTS",
        Dangerous,
        "write contact data",
        "Allows an application to modify the contact (address) data stored on your phone. Malicious applications can use this to erase or modify your contact data.",
    ),
    (
        "READ_PROFILE",
        Normal,
        "read the user's personal profile data",
        "Allows an application to read the user's personal profile data.",
    ),
    (
        "WRITE_PROFILE",
        Normal,
        "write the user's personal profile data",
        "Allows an application to write (but not read) the user's personal profile data.",
    ),
    (
        "READ_SOCIAL_STREAM",
        Normal,
        "read from the user's social stream",
        "Allows an application to read from the user's social stream.",
    ),
    (
        "WRITE_SOCIAL_STREAM",
        Normal,
        "write the user's social stream",
        "Allows an application to write (but not read) the user's social stream data.",
    ),
    (
        "READ_CALENDAR",
        Dangerous,
        "read calendar events",
        "Allows an application to read all of the calendar events stored on your phone. Malicious applications can use this to send your calendar events to other people.",
    ),
    (
        "WRITE_CALENDAR",
        Dangerous,
        "add or modify calendar events and send emails to guests",
        "Allows an application to add or change the events on your calendar, which may send emails to guests. Malicious applications can use this to erase or modify your calendar events or to send emails to guests.",
    ),
    (
        "READ_USER_DICTIONARY",
        Normal,
        "read user-defined dictionary",
        "Allows an application to read any private words, names and phrases that the user may have stored in the user dictionary.",
    ),
    (
        "WRITE_USER_DICTIONARY",
        Normal,
        "write to user-defined dictionary",
        "Allows an application to write new words into the user dictionary.",
    ),
    (
        "READ_HISTORY_BOOKMARKS",
        Normal,
        "read Browser's history and bookmarks",
        "Allows the application to read all the URLs that the browser has visited and all of the browser's bookmarks.",
    ),
    (
        "WRITE_HISTORY_BOOKMARKS",
        Normal,
        "write Browser's history and bookmarks",
        "Allows an application to modify the browser's history or bookmarks stored on your phone. Malicious applications can use this to erase or modify your browser's data.",
    ),
    (
        "SET_ALARM",
        Normal,
        "set alarm in alarm clock",
        "Allows the application to set an alarm in an installed alarm clock application. Some alarm clock applications may not implement this feature.",
    ),
    (
        "ACCESS_FINE_LOCATION",
        Dangerous,
        "fine (GPS) location",
        "Access fine location sources, such as the Global Positioning System on the phone, where available. Malicious applications can use this to determine where you are and may consume additional battery power.",
    ),
    (
        "ACCESS_COARSE_LOCATION",
        Dangerous,
        "coarse (network-based) location",
        "Access coarse location sources, such as the mobile network database, to determine an approximate phone location, where available. Malicious applications can use this to determine approximately where you are.",
    ),
    (
        "ACCESS_MOCK_LOCATION",
        Signature,
        "mock location sources for testing",
        "Create mock location sources for testing. Malicious applications can use this to override the location and/or status returned by real-location sources such as GPS or Network providers.",
    ),
    (
        "ACCESS_LOCATION_EXTRA_COMMANDS",
        Normal,
        "access extra location provider commands",
        "Access extra location provider commands. Malicious applications could use this to interfere with the operation of the GPS or other location sources.",
    ),
    (
        "INSTALL_LOCATION_PROVIDER",
        SignatureOrSystem,
        "permission to install a location provider",
        "Create mock location sources for testing. Malicious applications can use this to override the location and/or status returned by real-location sources such as GPS or Network providers, or monitor and report your location to an external source.",
    ),
    (
        "INTERNET",
        Normal,
        "full Internet access",
        "Allows an application to create network sockets.",
    ),
    (
        "ACCESS_NETWORK_STATE",
        Normal,
        "view network status",
        "Allows an application to view the status of all networks.",
    ),
    (
        "ACCESS_WIFI_STATE",
        Normal,
        "view Wi-Fi status",
        "Allows an application to view the information about the status of Wi-Fi.",
    ),
    (
        "BLUETOOTH",
        Normal,
        "create Bluetooth connections",
        "Allows an application to view configuration of the local Bluetooth phone and to make and accept connections with paired devices.",
    ),
    (
        "NFC",
        Normal,
        "control Near-Field Communication",
        "Allows an application to communicate with Near-Field Communication (NFC) tags, cards and readers.",
    ),
    (
        "USE_SIP",
        Dangerous,
        "make/receive Internet calls",
        "Allows an application to use the SIP service to make/receive Internet calls.",
    ),
    (
        "ACCOUNT_MANAGER",
        Signature,
        "act as the Account Manager Service",
        "Allows an application to make calls to Account Authenticators",
    ),
    (
        "GET_ACCOUNTS",
        Dangerous,
        "discover known accounts",
        "Allows an application to access the list of accounts known by the phone.",
    ),
    (
        "AUTHENTICATE_ACCOUNTS",
        Normal,
        "act as an account authenticator",
        "Allows an application to use the account authenticator capabilities of the Account Manager, including creating accounts as well as obtaining and setting their passwords.",
    ),
    (
        "USE_CREDENTIALS",
        Normal,
        "use the authentication credentials of an account",
        "Allows an application to request authentication tokens.",
    ),
    (
        "MANAGE_ACCOUNTS",
        Normal,
        "manage the accounts list",
        "Allows an application to perform operations like adding and removing accounts and deleting their password.",
    ),
    (
        "MODIFY_AUDIO_SETTINGS",
        Normal,
        "change your audio settings",
        "Allows application to modify global audio settings, such as volume and routing.",
    ),
    (
        "RECORD_AUDIO",
        Dangerous,
        "record audio",
        "Allows application to access the audio record path.",
    ),
    (
        "CAMERA",
        Dangerous,
        "take pictures and videos",
        "Allows application to take pictures and videos with the camera. This allows the application to collect images that the camera is seeing at any time.",
    ),
    (
        "VIBRATE",
        Normal,
        "control vibrator",
        "Allows the application to control the vibrator.",
    ),
    (
        "FLASHLIGHT",
        Normal,
        "control flashlight",
        "Allows the application to control the flashlight.",
    ),
    (
        "ACCESS_USB",
        SignatureOrSystem,
        "access USB devices",
        "Allows the application to access USB devices.",
    ),
    (
        "HARDWARE_TEST",
        Signature,
        "test hardware",
        "Allows the application to control various peripherals for the purpose of hardware testing.",
    ),
    (
        "PROCESS_OUTGOING_CALLS",
        Dangerous,
        "intercept outgoing calls",
        "Allows application to process outgoing calls and change the number to be dialled. Malicious applications may monitor, redirect or prevent outgoing calls.",
    ),
    (
        "MODIFY_PHONE_STATE",
        SignatureOrSystem,
        "modify phone status",
        "Allows the application to control the phone features of the device. An application with this permission can switch networks, turn the phone radio on and off and the like, without ever notifying you.",
    ),
    (
        "READ_PHONE_STATE",
        Dangerous,
        "read phone state and identity",
        "Allows the application to access the phone features of the device. An application with this permission can determine the phone number and serial number of this phone, whether a call is active, the number that call is connected to and so on.",
    ),
    (
        "WRITE_EXTERNAL_STORAGE",
        Dangerous,
        "read/modify/delete SD card contents",
        "Allows an application to write to the SD card.",
    ),
    (
        "READ_EXTERNAL_STORAGE",
        Dangerous,
        "read SD card contents",
        "Allows an application to read from SD Card.",
    ),
    (
        "WRITE_SETTINGS",
        Dangerous,
        "modify global system settings",
        "Allows an application to modify the system's settings data. Malicious applications can corrupt your system's configuration.",
    ),
    (
        "WRITE_SECURE_SETTINGS",
        SignatureOrSystem,
        "modify secure system settings",
        "Allows an application to modify the system's secure settings data. Not for use by common applications.",
    ),
    (
        "WRITE_GSERVICES",
        SignatureOrSystem,
        "modify the Google services map",
        "Allows an application to modify the Google services map. Not for use by common applications.",
    ),
    (
        "EXPAND_STATUS_BAR",
        Normal,
        "expand/collapse status bar",
        "Allows application to expand or collapse the status bar.",
    ),
    (
        "GET_TASKS",
        Dangerous,
        "retrieve running applications",
        "Allows application to retrieve information about currently and recently running tasks. May allow malicious applications to discover private information about other applications.",
    ),
    (
        "REORDER_TASKS",
        Normal,
        "reorder applications running",
        "Allows an application to move tasks to the foreground and background. Malicious applications can force themselves to the front without your control.",
    ),
    (
        "CHANGE_CONFIGURATION",
        Dangerous,
        "change your UI settings",
        "Allows an application to change the current configuration, such as the locale or overall font size.",
    ),
    (
        "RESTART_PACKAGES",
        Normal,
        "kill background processes",
        "Allows an application to kill background processes of other applications, even if memory is not low.",
    ),
    (
        "KILL_BACKGROUND_PROCESSES",
        Normal,
        "kill background processes",
        "Allows an application to kill background processes of other applications, even if memory is not low.",
    ),
    (
        "FORCE_STOP_PACKAGES",
        Signature,
        "force-stop other applications",
        "Allows an application to stop other applications forcibly.",
    ),
    (
        "DUMP",
        SignatureOrSystem,
        "retrieve system internal status",
        "Allows application to retrieve internal status of the system. Malicious applications may retrieve a wide variety of private and secure information that they should never commonly need.",
    ),
    (
        "SYSTEM_ALERT_WINDOW",
        Dangerous,
        "display system-level alerts",
        "Allows an application to show system-alert windows. Malicious applications can take over the entire screen of the phone.",
    ),
    (
        "SET_ANIMATION_SCALE",
        Dangerous,
        "modify global animation speed",
        "Allows an application to change the global animation speed (faster or slower animations) at any time.",
    ),
    (
        "PERSISTENT_ACTIVITY",
        Dangerous,
        "make application always run",
        "Allows an application to make parts of itself persistent, so that the system can't use it for other applications.",
    ),
    (
        "GET_PACKAGE_SIZE",
        Normal,
        "measure application storage space",
        "Allows an application to retrieve its code, data and cache sizes",
    ),
    (
        "SET_PREFERRED_APPLICATIONS",
        Signature,
        "set preferred applications",
        "Allows an application to modify your preferred applications. This can allow malicious applications to silently change the applications that are run, spoofing your existing applications to collect private data from you.",
    ),
    (
        "RECEIVE_BOOT_COMPLETED",
        Normal,
        "automatically start at boot",
        "Allows an application to start itself as soon as the system has finished booting. This can make it take longer to start the phone and allow the application to slow down the overall phone by always running.",
    ),
    (
        "BROADCAST_STICKY",
        Normal,
        "send sticky broadcast",
        "Allows an application to send sticky broadcasts, which remain after the broadcast ends. Malicious applications can make the phone slow or unstable by causing it to use too much memory.",
    ),
    (
        "WAKE_LOCK",
        Normal,
        "prevent phone from sleeping",
        "Allows an application to prevent the phone from going to sleep.",
    ),
    (
        "SET_WALLPAPER",
        Normal,
        "set wallpaper",
        "Allows the application to set the system wallpaper.",
    ),
    (
        "SET_WALLPAPER_HINTS",
        Normal,
        "set wallpaper size hints",
        "Allows the application to set the system wallpaper size hints.",
    ),
    (
        "SET_TIME",
        SignatureOrSystem,
        "set time",
        "Allows an application to change the phone's clock time.",
    ),
    (
        "SET_TIME_ZONE",
        Dangerous,
        "set time zone",
        "Allows an application to change the phone's time zone.",
    ),
    (
        "MOUNT_UNMOUNT_FILESYSTEMS",
        Dangerous,
        "mount and unmount file systems",
        "Allows the application to mount and unmount file systems for removable storage.",
    ),
    (
        "MOUNT_FORMAT_FILESYSTEMS",
        Dangerous,
        "format external storage",
        "Allows the application to format removable storage.",
    ),
    (
        "ASEC_ACCESS",
        Signature,
        "get information on internal storage",
        "Allows the application to get information on internal storage.",
    ),
    (
        "ASEC_CREATE",
        Signature,
        "create internal storage",
        "Allows the application to create internal storage.",
    ),
    (
        "ASEC_DESTROY",
        Signature,
        "destroy internal storage",
        "Allows the application to destroy internal storage.",
    ),
    (
        "ASEC_MOUNT_UNMOUNT",
        Signature,
        "mount/unmount internal storage",
        "Allows the application to mount/unmount internal storage.",
    ),
    (
        "ASEC_RENAME",
        Signature,
        "rename internal storage",
        "Allows the application to rename internal storage.",
    ),
    (
        "DISABLE_KEYGUARD",
        Dangerous,
        "disable key lock",
        "Allows an application to disable the key lock and any associated password security. A legitimate example of this is the phone disabling the key lock when receiving an incoming phone call, then re-enabling the key lock when the call is finished.",
    ),
    (
        "READ_SYNC_SETTINGS",
        Normal,
        "read sync settings",
        "Allows an application to read the sync settings, such as whether sync is enabled for Contacts.",
    ),
    (
        "WRITE_SYNC_SETTINGS",
        Normal,
        "write sync settings",
        "Allows an application to modify the sync settings, such as whether sync is enabled for Contacts.",
    ),
    (
        "READ_SYNC_STATS",
        Normal,
        "read sync statistics",
        "Allows an application to read the sync stats; e.g. the history of syncs that have occurred.",
    ),
    (
        "WRITE_APN_SETTINGS",
        SignatureOrSystem,
        "write Access Point Name settings",
        "Allows an application to modify the APN settings, such as Proxy and Port of any APN.",
    ),
    (
        "SUBSCRIBED_FEEDS_READ",
        Normal,
        "read subscribed feeds",
        "Allows an application to receive details about the currently synced feeds.",
    ),
    (
        "SUBSCRIBED_FEEDS_WRITE",
        Normal,
        "write subscribed feeds",
        "Allows an application to modify your currently synced feeds. This could allow a malicious application to change your synced feeds.",
    ),
    (
        "CHANGE_NETWORK_STATE",
        Normal,
        "change network connectivity",
        "Allows an application to change the state of network connectivity.",
    ),
    (
        "CHANGE_WIFI_STATE",
        Normal,
        "change Wi-Fi status",
        "Allows an application to connect to and disconnect from Wi-Fi access points and to make changes to configured Wi-Fi networks.",
    ),
    (
        "CHANGE_WIFI_MULTICAST_STATE",
        Normal,
        "allow Wi-Fi Multicast reception",
        "Allows an application to receive packets not directly addressed to your device. This can be useful when discovering services offered nearby. It uses more power than the non-multicast mode.",
    ),
    (
        "BLUETOOTH_ADMIN",
        Normal,
        "bluetooth administration",
        "Allows an application to configure the local Bluetooth phone and to discover and pair with remote devices.",
    ),
    (
        "CLEAR_APP_CACHE",
        SignatureOrSystem,
        "delete all application cache data",
        "Allows an application to free phone storage by deleting files in application cache directory. Access is usually very restricted to system process.",
    ),
    (
        "READ_LOGS",
        SignatureOrSystem,
        "read sensitive log data",
        "Allows an application to read from the system's various log files. This allows it to discover general information about what you are doing with the phone, potentially including personal or private information.",
    ),
    (
        "SET_DEBUG_APP",
        SignatureOrSystem,
        "enable application debugging",
        "Allows an application to turn on debugging for another application. Malicious applications can use this to kill other applications.",
    ),
    (
        "SET_PROCESS_LIMIT",
        SignatureOrSystem,
        "limit number of running processes",
        "Allows an application to control the maximum number of processes that will run. Never needed for common applications.",
    ),
    (
        "SET_ALWAYS_FINISH",
        SignatureOrSystem,
        "make all background applications close",
        "Allows an application to control whether activities are always finished as soon as they go to the background. Never needed for common applications.",
    ),
    (
        "SIGNAL_PERSISTENT_PROCESSES",
        SignatureOrSystem,
        "send Linux signals to applications",
        "Allows application to request that the supplied signal be sent to all persistent processes.",
    ),
    (
        "DIAGNOSTIC",
        Signature,
        "read/write to resources owned by diag",
        "Allows an application to read and write to any resource owned by the diag group; for example, files in /dev. This could potentially affect system stability and security. This should ONLY be used for hardware-specific diagnostics by the manufacturer or operator.",
    ),
    (
        "STATUS_BAR",
        SignatureOrSystem,
        "disable or modify status bar",
        "Allows application to disable the status bar or add and remove system icons.",
    ),
    (
        "STATUS_BAR_SERVICE",
        Signature,
        "status bar",
        "Allows the application to be the status bar.",
    ),
    (
        "FORCE_BACK",
        Signature,
        "force application to close",
        "Allows an application to force any activity that is in the foreground to close and go back. Should never be needed for common applications.",
    ),
    (
        "UPDATE_DEVICE_STATS",
        SignatureOrSystem,
        "modify battery statistics",
        "Allows the modification of collected battery statistics. Not for use by common applications.",
    ),
    (
        "INTERNAL_SYSTEM_WINDOW",
        Signature,
        "display unauthorised windows",
        "Allows the creation of windows that are intended to be used by the internal system user interface. Not for use by common applications.",
    ),
    (
        "MANAGE_APP_TOKENS",
        Signature,
        "manage application tokens",
        "Allows applications to create and manage their own tokens, bypassing their common Z-ordering. Should never be needed for common applications.",
    ),
    (
        "INJECT_EVENTS",
        Signature,
        "press keys and control buttons",
        "Allows an application to deliver its own input events (key presses, etc.) to other applications. Malicious applications can use this to take over the phone.",
    ),
    (
        "SET_ACTIVITY_WATCHER",
        Signature,
        "monitor and control all application launching",
        "Allows an application to monitor and control how the system launches activities. Malicious applications may compromise the system completely. This permission is needed only for development, never for common phone usage.",
    ),
    (
        "SHUTDOWN",
        SignatureOrSystem,
        "partial shutdown",
        "Puts the activity manager into a shut-down state. Does not perform a complete shut down.",
    ),
    (
        "STOP_APP_SWITCHES",
        SignatureOrSystem,
        "prevent app switches",
        "Prevents the user from switching to another application.",
    ),
    (
        "READ_INPUT_STATE",
        Signature,
        "record what you type and actions that you take",
        "Allows applications to watch the keys that you press even when interacting with another application (such as entering a password). Should never be needed for common applications.",
    ),
    (
        "BIND_INPUT_METHOD",
        Signature,
        "bind to an input method",
        "Allows the holder to bind to the top-level interface of an input method. Should never be needed for common applications.",
    ),
    (
        "BIND_WALLPAPER",
        SignatureOrSystem,
        "bind to wallpaper",
        "Allows the holder to bind to the top-level interface of wallpaper. Should never be needed for common applications.",
    ),
    (
        "BIND_DEVICE_ADMIN",
        Signature,
        "interact with device admin",
        "Allows the holder to send intents to a device administrator. Should never be needed for common applications.",
    ),
    (
        "SET_ORIENTATION",
        Signature,
        "change screen orientation",
        "Allows an application to change the rotation of the screen at any time. Should never be needed for common applications.",
    ),
    (
        "INSTALL_PACKAGES",
        SignatureOrSystem,
        "directly install applications",
        "Allows an application to install new or updated Android packages. Malicious applications can use this to add new applications with arbitrarily powerful permissions.",
    ),
    (
        "REQUEST_INSTALL_PACKAGES",
        Signature,
        "Allows an application to request installing packages.",
        "Malicious applications can use this to try and trick users into installing additional malicious packages.",
    ),
    (
        "CLEAR_APP_USER_DATA",
        Signature,
        "delete other applications' data",
        "Allows an application to clear user data.",
    ),
    (
        "DELETE_CACHE_FILES",
        SignatureOrSystem,
        "delete other applications' caches",
        "Allows an application to delete cache files.",
    ),
    (
        "DELETE_PACKAGES",
        SignatureOrSystem,
        "delete applications",
        "Allows an application to delete Android packages. Malicious applications can use this to delete important applications.",
    ),
    (
        "MOVE_PACKAGE",
        Signature,
        "Move application resources",
        "Allows an application to move application resources from internal to external media and vice versa.",
    ),
    (
        "CHANGE_COMPONENT_ENABLED_STATE",
        Signature,
        "enable or disable application components",
        "Allows an application to change whether or not a component of another application is enabled. Malicious applications can use this to disable important phone capabilities. It is important to be careful with permission, as it is possible to bring application components into an unusable, inconsistent or unstable state.",
    ),
    (
        "ACCESS_SURFACE_FLINGER",
        Signature,
        "access SurfaceFlinger",
        "Allows application to use SurfaceFlinger low-level features.",
    ),
    (
        "READ_FRAME_BUFFER",
        Signature,
        "read frame buffer",
        "Allows application to read the content of the frame buffer.",
    ),
    (
        "BRICK",
        Signature,
        "permanently disable phone",
        "Allows the application to disable the entire phone permanently. This is very dangerous.",
    ),
    (
        "REBOOT",
        Signature,
        "force phone reboot",
        "Allows the application to force the phone to reboot.",
    ),
    (
        "DEVICE_POWER",
        Signature,
        "turn phone on or off",
        "Allows the application to turn the phone on or off.",
    ),
    (
        "FACTORY_TEST",
        Signature,
        "run in factory test mode",
        "Run as a low-level manufacturer test, allowing complete access to the phone hardware. Only available when a phone is running in manufacturer test mode.",
    ),
    (
        "BROADCAST_PACKAGE_REMOVED",
        Signature,
        "send package removed broadcast",
        "Allows an application to broadcast a notification that an application package has been removed. Malicious applications may use this to kill any other application running.",
    ),
    (
        "BROADCAST_SMS",
        Signature,
        "send SMS-received broadcast",
        "Allows an application to broadcast a notification that an SMS message has been received. Malicious applications may use this to forge incoming SMS messages.",
    ),
    (
        "BROADCAST_WAP_PUSH",
        Signature,
        "send WAP-PUSH-received broadcast",
        "Allows an application to broadcast a notification that a WAP-PUSH message has been received. Malicious applications may use this to forge MMS message receipt or to replace the content of any web page silently with malicious variants.",
    ),
    (
        "MASTER_CLEAR",
        Signature,
        "reset system to factory defaults",
        "Allows an application to completely reset the system to its factory settings, erasing all data, configuration and installed applications.",
    ),
    (
        "CALL_PRIVILEGED",
        Signature,
        "directly call any phone numbers",
        "Allows the application to call any phone number, including emergency numbers, without your intervention. Malicious applications may place unnecessary and illegal calls to emergency services.",
    ),
    (
        "PERFORM_CDMA_PROVISIONING",
        Signature,
        "directly start CDMA phone setup",
        "Allows the application to start CDMA provisioning. Malicious applications may start CDMA provisioning unnecessarily",
    ),
    (
        "CONTROL_LOCATION_UPDATES",
        Signature,
        "control location update notifications",
        "Allows enabling/disabling location update notifications from the radio. Not for use by common applications.",
    ),
    (
        "ACCESS_CHECKIN_PROPERTIES",
        Signature,
        "access check-in properties",
        "Allows read/write access to properties uploaded by the check-in service. Not for use by common applications.",
    ),
    (
        "PACKAGE_USAGE_STATS",
        Signature,
        "update component usage statistics",
        "Allows the modification of collected component usage statistics. Not for use by common applications.",
    ),
    (
        "BATTERY_STATS",
        Signature,
        "modify battery statistics",
        "Allows the modification of collected battery statistics. Not for use by common applications.",
    ),
    (
        "BACKUP",
        Signature,
        "control system back up and restore",
        "Allows the application to control the system's back-up and restore mechanism. Not for use by common applications.",
    ),
    (
        "BIND_APPWIDGET",
        Signature,
        "choose widgets",
        "Allows the application to tell the system which widgets can be used by which application. With this permission, applications can give access to personal data to other applications. Not for use by common applications.",
    ),
    (
        "CHANGE_BACKGROUND_DATA_SETTING",
        Signature,
        "change background data usage setting",
        "Allows an application to change the background data usage setting.",
    ),
    (
        "GLOBAL_SEARCH",
        Signature,
        "",
        "",
    ),
    (
        "GLOBAL_SEARCH_CONTROL",
        Signature,
        "",
        "",
    ),
    (
        "SET_WALLPAPER_COMPONENT",
        Signature,
        "",
        "",
    ),
    (
        "ACCESS_CACHE_FILESYSTEM",
        Signature,
        "access the cache file system",
        "Allows an application to read and write the cache file system.",
    ),
    (
        "BLUETOOTH_ADVERTISE",
        Dangerous,
        "access the cache file system",
        "Allows an application to read and write the cache file system.",
    ),
    (
        "BLUETOOTH_CONNECT",
        Dangerous,
        "access the cache file system",
        "Allows an application to read and write the cache file system.",
    ),
    (
        "BLUETOOTH_SCAN",
        Dangerous,
        "access the cache file system",
        "Allows an application to read and write the cache file system.",
    ),
    (
        "UWB_RANGING",
        Dangerous,
        "access the cache file system",
        "Allows an application to read and write the cache file system.",
    ),
    (
        "COPY_PROTECTED_DATA",
        Signature,
        "Allows to invoke default container service to copy content. Not for use by common applications.",
        "Allows to invoke default container service to copy content. Not for use by common applications.",
    ),
    (
        "C2D_MESSAGE",
        Signature,
        "Allows cloud to device messaging",
        "Allows the application to receive push notifications.",
    ),
    (
        "RECEIVE",
        Signature,
        "C2DM permissions",
        "Permission for cloud to device messaging.",
    ),
    (
        "ADD_VOICEMAIL",
        Dangerous,
        "add voicemails into the system",
        "Allows an application to add voicemails into the system.",
    ),
    (
        "ACCEPT_HANDOVER",
        Dangerous,
        "",
        "Allows a calling app to continue a call which was started in another app.  An example is a video calling app that wants to continue a voice call on the user's mobile network.",
    ),
    (
        "ACCESS_NOTIFICATION_POLICY",
        Normal,
        "",
        "Marker permission for applications that wish to access notification policy.",
    ),
    (
        "ANSWER_PHONE_CALLS",
        Dangerous,
        "",
        "Allows the app to answer an incoming phone call.",
    ),
    (
        "BIND_ACCESSIBILITY_SERVICE",
        Signature,
        "",
        "Must be required by an AccessibilityService, to ensure that only the system can bind to it.",
    ),
    (
        "BIND_AUTOFILL_SERVICE",
        Signature,
        "",
        "Must be required by a AutofillService, to ensure that only the system can bind to it.",
    ),
    (
        "BIND_CARRIER_MESSAGING_SERVICE",
        Signature,
        "",
        "The system process that is allowed to bind to services in carrier apps will have this permission.",
    ),
    (
        "BIND_CARRIER_SERVICES",
        Signature,
        "",
        "The system process that is allowed to bind to services in carrier apps will have this permission. Carrier apps should use this permission to protect their services that only the system is allowed to bind to.",
    ),
    (
        "BIND_CHOOSER_TARGET_SERVICE",
        Signature,
        "",
        "Must be required by a ChooserTargetService, to ensure that only the system can bind to it",
    ),
    (
        "BIND_CONDITION_PROVIDER_SERVICE",
        Signature,
        "",
        "Must be required by a ConditionProviderService, to ensure that only the system can bind to it",
    ),
    (
        "BIND_DREAM_SERVICE",
        Signature,
        "",
        "Must be required by an DreamService, to ensure that only the system can bind to it.",
    ),
    (
        "BIND_INCALL_SERVICE",
        Signature,
        "",
        "Must be required by a InCallService, to ensure that only the system can bind to it.",
    ),
    (
        "BIND_MIDI_DEVICE_SERVICE",
        Signature,
        "",
        "Must be required by an MidiDeviceService, to ensure that only the system can bind to it.",
    ),
    (
        "BIND_NFC_SERVICE",
        Signature,
        "",
        "Must be required by a HostApduService or OffHostApduService to ensure that only the system can bind to it.",
    ),
    (
        "BIND_NOTIFICATION_LISTENER_SERVICE",
        Signature,
        "",
        "Must be required by an NotificationListenerService, to ensure that only the system can bind to it.",
    ),
    (
        "BIND_PRINT_SERVICE",
        Signature,
        "",
        "Must be required by a PrintService, to ensure that only the system can bind to it.",
    ),
    (
        "BIND_QUICK_SETTINGS_TILE",
        Signature,
        "",
        "Allows an application to bind to third party quick settings tiles.",
    ),
    (
        "BIND_REMOTEVIEWS",
        Signature,
        "",
        "Must be required by a RemoteViewsService, to ensure that only the system can bind to it.",
    ),
    (
        "BIND_SCREENING_SERVICE",
        Signature,
        "",
        "Must be required by a CallScreeningService, to ensure that only the system can bind to it.",
    ),
    (
        "BIND_TELECOM_CONNECTION_SERVICE",
        Signature,
        "",
        "Must be required by a ConnectionService, to ensure that only the system can bind to it.",
    ),
    (
        "BIND_TEXT_SERVICE",
        Signature,
        "",
        "Must be required by a TextService (e.g. SpellCheckerService) to ensure that only the system can bind to it.",
    ),
    (
        "BIND_TV_INPUT",
        Signature,
        "",
        "Must be required by a TvInputService to ensure that only the system can bind to it.",
    ),
    (
        "BIND_VISUAL_VOICEMAIL_SERVICE",
        Signature,
        "",
        "Must be required by a link",
    ),
    (
        "BIND_VOICE_INTERACTION",
        Signature,
        "",
        "Must be required by a VoiceInteractionService, to ensure that only the system can bind to it.",
    ),
    (
        "BIND_VPN_SERVICE",
        Signature,
        "",
        "Must be required by a VpnService, to ensure that only the system can bind to it.",
    ),
    (
        "BIND_VR_LISTENER_SERVICE",
        Signature,
        "",
        "Must be required by an VrListenerService, to ensure that only the system can bind to it.",
    ),
    (
        "BLUETOOTH_PRIVILEGED",
        Signature,
        "",
        "Allows applications to pair bluetooth devices without user interaction, and to allow or disallow phonebook access or message access. This is not available to third party applications.",
    ),
    (
        "BODY_SENSORS",
        Dangerous,
        "",
        "Allows an application to access data from sensors that the user uses to measure what is happening inside his/her body, such as heart rate.",
    ),
    (
        "CAPTURE_AUDIO_OUTPUT",
        Signature,
        "",
        "Allows an application to capture audio output.",
    ),
    (
        "CAPTURE_SECURE_VIDEO_OUTPUT",
        Signature,
        "",
        "Allows an application to capture secure video output.",
    ),
    (
        "CAPTURE_VIDEO_OUTPUT",
        Signature,
        "",
        "Allows an application to capture video output.",
    ),
    (
        "FOREGROUND_SERVICE",
        Normal,
        "",
        "Allows a regular application to use Service.startForeground",
    ),
    (
        "GET_ACCOUNTS_PRIVILEGED",
        Signature,
        "",
        "Allows access to the list of accounts in the Accounts Service.",
    ),
    (
        "INSTALL_SHORTCUT",
        Normal,
        "",
        "Allows an application to install a shortcut in Launcher.",
    ),
    (
        "INSTANT_APP_FOREGROUND_SERVICE",
        Signature,
        "",
        "Allows an instant app to create foreground services.",
    ),
    (
        "LOCATION_HARDWARE",
        Signature,
        "",
        "Allows an application to use location features in hardware, such as the geofencing api.",
    ),
    (
        "READ_CELL_BROADCASTS",
        Dangerous,
        "",
        "Allows an application to use location features in hardware, such as the geofencing api.",
    ),
    (
        "MANAGE_DOCUMENTS",
        Signature,
        "",
        "Allows an application to manage access to documents, usually as part of a document picker.",
    ),
    (
        "MANAGE_OWN_CALLS",
        Normal,
        "",
        "Allows a calling application which manages it own calls through the self-managed",
    ),
    (
        "MEDIA_CONTENT_CONTROL",
        Signature,
        "",
        "Allows an application to know what content is playing and control its playback.",
    ),
    (
        "NFC_TRANSACTION_EVENT",
        Normal,
        "",
        "Allows applications to receive NFC transaction events.",
    ),
    (
        "READ_CALL_LOG",
        Dangerous,
        "",
        "Allows an application to read the user's call log.",
    ),
    (
        "READ_PHONE_NUMBERS",
        Dangerous,
        "",
        "Allows read access to the device's phone number(s). This is a subset of the capabilities granted by",
    ),
    (
        "READ_VOICEMAIL",
        Signature,
        "",
        "Allows an application to read voicemails in the system.",
    ),
    (
        "REQUEST_COMPANION_RUN_IN_BACKGROUND",
        Normal,
        "",
        "Allows a companion app to run in the background.",
    ),
    (
        "REQUEST_COMPANION_USE_DATA_IN_BACKGROUND",
        Normal,
        "",
        "Allows a companion app to use data in the background.",
    ),
    (
        "REQUEST_DELETE_PACKAGES",
        Normal,
        "",
        "Allows an application to request deleting packages. Apps targeting APIs",
    ),
    (
        "REQUEST_IGNORE_BATTERY_OPTIMIZATIONS",
        Normal,
        "",
        "Permission an application must hold in order to use",
    ),
    (
        "SEND_RESPOND_VIA_MESSAGE",
        Signature,
        "",
        "Allows an application (Phone) to send a request to other applications to handle the respond-via-message action during incoming calls.",
    ),
    (
        "TRANSMIT_IR",
        Normal,
        "",
        "Allows using the device's IR transmitter, if available.",
    ),
    (
        "UNINSTALL_SHORTCUT",
        Normal,
        "",
        "Don't use this permission in your app. This permission is no longer supported.",
    ),
    (
        "USE_BIOMETRIC",
        Normal,
        "",
        "Allows an app to use device supported biometric modalities.",
    ),
    (
        "USE_FINGERPRINT",
        Normal,
        "allow use of fingerprint",
        "This constant was deprecated in API level 28. Applications should request USE_BIOMETRIC instead",
    ),
    (
        "WRITE_CALL_LOG",
        Dangerous,
        "",
        "Allows an application to write (but not read) the user's call log data.",
    ),
    (
        "WRITE_VOICEMAIL",
        Signature,
        "",
        "Allows an application to modify and remove existing voicemails in the system.",
    ),
    (
        "ACCESS_BACKGROUND_LOCATION",
        Dangerous,
        "access location in background",
        "Allows an app to access location in the background. If you're requesting this permission, you must also request either",
    ),
    (
        "ACCESS_MEDIA_LOCATION",
        Dangerous,
        "access any geographic locations",
        "Allows an application to access any geographic locations persisted in the user's shared collection.",
    ),
    (
        "ACTIVITY_RECOGNITION",
        Dangerous,
        "allow application to recognize physical activity",
        "Allows an application to recognize physical activity.",
    ),
    (
        "BIND_CALL_REDIRECTION_SERVICE",
        Signature,
        "",
        "Must be required by a CallRedirectionService, to ensure that only the system can bind to it.",
    ),
    (
        "BIND_CARRIER_MESSAGING_CLIENT_SERVICE",
        Signature,
        "",
        "A subclass of CarrierMessagingClientService must be protected with this permission.",
    ),
    (
        "CALL_COMPANION_APP",
        Normal,
        "",
        "Allows an app which implements the InCallService API to be eligible to be enabled as a calling companion app. This means that the Telecom framework will bind to the app's InCallService implementation when there are calls active. The app can use the InCallService API to view information about calls on the system and control these calls.",
    ),
    (
        "REQUEST_PASSWORD_COMPLEXITY",
        Normal,
        "",
        "Allows an application to request the screen lock complexity and prompt users to update the screen lock to a certain complexity level.",
    ),
    (
        "SMS_FINANCIAL_TRANSACTIONS",
        Signature,
        "Allows financial apps to read filtered sms messages",
        "Allows financial apps to read filtered sms messages. Protection level: signature|appop",
    ),
    (
        "START_VIEW_PERMISSION_USAGE",
        Signature,
        "",
        "Allows the holder to start the permission usage screen for an app.",
    ),
    (
        "USE_FULL_SCREEN_INTENT",
        Normal,
        "",
        "Required for apps targeting Build.VERSION_CODES.Q that want to use notification full screen intents.",
    ),
    (
        "ACCESS_CALL_AUDIO",
        Signature,
        "Application can access call audio",
        "Allows an application assigned to the Dialer role to be granted access to the telephony call audio streams, both TX and RX.",
    ),
    (
        "BIND_CONTROLS",
        Signature,
        "Allows SystemUI to request third party controls.",
        "Allows SystemUI to request third party controls. Should only be requested by the System and required by ControlsProviderService declarations.",
    ),
    (
        "BIND_QUICK_ACCESS_WALLET_SERVICE",
        Signature,
        "",
        "Must be required by a QuickAccessWalletService to ensure that only the system can bind to it.",
    ),
    (
        "INTERACT_ACROSS_PROFILES",
        Signature,
        "",
        "Allows interaction across profiles in the same profile group.",
    ),
    (
        "LOADER_USAGE_STATS",
        Signature,
        "",
        "Allows a data loader to read a package's access logs. The access logs contain the set of pages referenced over time.",
    ),
    (
        "MANAGE_EXTERNAL_STORAGE",
        Signature,
        "Allows an application a broad access to external storage in scoped storage",
        "Allows an application a broad access to external storage in scoped storage. Intended to be used by few apps that need to manage files on behalf of the users.",
    ),
    (
        "NFC_PREFERRED_PAYMENT_INFO",
        Normal,
        "",
        "Allows applications to receive NFC preferred payment service information.",
    ),
    (
        "QUERY_ALL_PACKAGES",
        Normal,
        "",
        "Allows query of any normal app on the device, regardless of manifest declarations.",
    ),
    (
        "READ_PRECISE_PHONE_STATE",
        Signature,
        "",
        "Allows read only access to precise phone state. Allows reading of detailed information about phone state for special-use applications such as dialers, carrier applications, or ims applications.",
    ),
    (
        "HAND_TRACKING",
        Dangerous,
        "",
        "Allows an app to use hand tracking component.",
    ),
    (
        "RENDER_MODEL",
        Dangerous,
        "",
        "Allows an app to use model rendering component.",
    ),
    (
        "TRACKED_KEYBOARD",
        Normal,
        "",
        "Allows an app to use keyboard tracking component.",
    ),
    (
        "USE_ANCHOR_API",
        Normal,
        "",
        "Allows an app to use anchor.",
    ),
    (
        "FACE_TRACKING",
        Dangerous,
        "",
        "Allows an app to use face tracking component.",
    ),
    (
        "TOUCH_CONTROLLER_PRO",
        Dangerous,
        "",
        "Allows an app to use touch controller component.",
    ),
    (
        "BODY_TRACKING",
        Dangerous,
        "",
        "Allows an app to use body tracking component.",
    ),
    (
        "EYE_TRACKING",
        Dangerous,
        "",
        "Allows an app to use eye tracking component.",
    ),
    (
        "DEVICE_CONFIG_PUSH_TO_CLIENT",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "ACCESS_MR_SENSOR_DATA",
        Dangerous,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "CODEC_AVATAR",
        Dangerous,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "CODEC_AVATAR_CAMERA",
        Dangerous,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "FACE_EYE_INTERNAL_API",
        Dangerous,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "FITNESS_TOOLKIT",
        Dangerous,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "ORTHOFIT_DATA",
        Dangerous,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "RECORD_MR_STREAM",
        Dangerous,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "TRACKING_INJECTION",
        Dangerous,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "USE_SCENE",
        Dangerous,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "READ_TV_LISTINGS",
        Dangerous,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "HANDTRACKING_DATA",
        Dangerous,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "ACCESS_WIMAX_STATE",
        Normal,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "CHANGE_WIMAX_STATE",
        Normal,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "READ_INSTALL_SESSIONS",
        Normal,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "FBCONNECT_CONTENT_PROVIDER_READ_ACCESS",
        Normal,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "FBCONNECT_CONTENT_PROVIDER_WRITE_ACCESS",
        SignatureOrSystem,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "ACCESS_ALL_DOWNLOADS",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "ACCESS_BROADCAST_RADIO",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "ACCESS_BLUETOOTH_SHARE",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "REQUEST_DEVELOPER_STATUS",
        SignatureOrSystem,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "PLATFORM_ATTESTATION",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "READ_PACKAGE_INTEGRITY_PROVIDER",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "BROADCAST_PERMISSION",
        SignatureOrSystem,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "READ_FITNESS_DATA",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "WRITE_FITNESS_DATA",
        SignatureOrSystem,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "OVR_PLATFORM_BROADCAST",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "ALWAYS_CAPTURE_MIC_AUDIO_INPUT",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "DUMP_ON_DEMAND",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "INTERACT_ACROSS_USERS",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "PLAY_AUDIO_BACKGROUND",
        Normal,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "PRIORITY_CAPTURE_MIC_AUDIO_INPUT",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "QUIET_FOREGROUND_SERVICE",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "READ_SETTINGS",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "READ_PRIVILEGED_PHONE_STATE",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "MANAGE_USERS",
        SignatureOrSystem,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "INTERACT_ACROSS_USERS_FULL",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "CONNECT_TO_DUMPSYSPROXY",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "RECORD_AUDIO_BACKGROUND",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "UPDATE_TELEMETRY_SESSIONS",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "ACCESS_BACKGROUND_INPUT_TRACKING",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "READ_CONTROLLER_STATUS",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "WRITE_MEDIA_STORAGE",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "MODIFY_CONTROLLER_STATUS",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "READ_DEVICE_CONFIG",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "METADEVICECONFIG_RECEIVE_FROM_SERVICE_DEBUG",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "METADEVICECONFIG_RECEIVE_FROM_SERVICE",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "ACCESS_PANEL_ACTIVITY_FEATURES",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "READ_FOCUS_STATE",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "POST_NOTIFICATIONS",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "BIND_PRESENCE_SERVICE",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "MANAGE_LOCKSCREEN",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
    (
        "METACAM_SCREEN_CAPTURE",
        Signature,
        "",
        "Allows an app to send device configuration to client.",
    ),
];

/// `(group name, description)`
pub(crate) static PERMISSION_GROUPS: &[(&str, &str)] = &[
    (
        "ACCOUNTS",
        "Permissions for direct access to the accounts managed by the Account Manager.",
    ),
    (
        "COST_MONEY",
        "Used for permissions that can be used to make the user spend money without their direct involvement.",
    ),
    (
        "DEVELOPMENT_TOOLS",
        "Group of permissions that are related to development features.",
    ),
    (
        "HARDWARE_CONTROLS",
        "Used for permissions that provide direct access to the hardware on the device.",
    ),
    (
        "LOCATION",
        "Used for permissions that allow access to the user's current location.",
    ),
    (
        "MESSAGES",
        "Used for permissions that allow an application to send messages on behalf of the user or intercept messages being received by the user.",
    ),
    (
        "NETWORK",
        "Used for permissions that provide access to networking services.",
    ),
    (
        "PERSONAL_INFO",
        "Used for permissions that provide access to the user's private data, such as contacts, calendar events, e-mail messages, etc.",
    ),
    (
        "PHONE_CALLS",
        "Used for permissions that are associated with accessing and modifyign telephony state: intercepting outgoing calls, reading and modifying the phone state.",
    ),
    (
        "STORAGE",
        "Group of permissions that are related to SD card access.",
    ),
    (
        "SYSTEM_TOOLS",
        "Group of permissions that are related to system APIs.",
    ),
];
