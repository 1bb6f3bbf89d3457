pub const TOOLKIT_ROOT_VAR: &str = "VULKAN_SDK";
pub const COMPILER_SUBPATH: [&str; 2] = ["Bin32", "glslangValidator.exe"];
pub const VALIDATION_FLAG: &str = "-V";
pub const OUTPUT_FLAG: &str = "-o";
/// Exit code for failures caught before the compiler is launched.
pub const LOCAL_FAILURE_CODE: i32 = 1;
