use gl::types::*;
use std::cmp;
use std::ffi;

use crate::errors::*;

/// Describes the OpenGL context profile.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Profile {
    /// The context uses only future-compatible functions and definitions.
    Core,
    /// The context includes all immediate mode functions and definitions.
    Compatibility,
}

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Parses the string returned by `glGetString(GL_VERSION)`, e.g. `"3.3.0 NVIDIA 390.77"`
    /// or `"OpenGL ES 3.0 Mesa 18.0.5"`.
    pub fn from_desc(desc: &str) -> Result<Version> {
        let (es, version) = if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else if desc.starts_with("OpenGL ES-") {
            // "OpenGL ES-CM 1.1" and "OpenGL ES-CL 1.1".
            (true, desc.get(13..).unwrap_or(""))
        } else {
            (false, desc)
        };

        let malformed = || format_err!("[GL] Version string {:?} is malformed.", desc);

        let version = version.split(' ').next().ok_or_else(malformed)?;
        let mut iter = version.split('.');

        let major = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;

        let minor = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }
}

macro_rules! extensions {
    ($($string:expr => $field:ident,)+) => {
        /// Contains data about the list of extensions.
        #[derive(Debug, Clone, Copy, Default)]
        pub struct Extensions {
            $(
                pub $field: bool,
            )+
        }

        impl Extensions {
            /// Returns the list of extensions supported by the backend.
            ///
            /// *Safety*: the OpenGL context must be current in the thread, and `version` must
            /// be the one of that context.
            pub unsafe fn parse(version: Version) -> Result<Extensions> {
                let strings: Vec<String> = if version >= Version::GL(3, 0) || version >= Version::ES(3, 0) {
                    if !gl::GetStringi::is_loaded() {
                        bail!("[GL] Failed to load entry point glGetStringi.");
                    }

                    let mut num_extensions = 0;
                    gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut num_extensions);
                    (0 .. num_extensions).filter_map(|i| {
                        let ext = gl::GetStringi(gl::EXTENSIONS, i as GLuint);
                        if ext.is_null() {
                            None
                        } else {
                            Some(ffi::CStr::from_ptr(ext as *const _).to_string_lossy().into_owned())
                        }
                    }).collect()
                } else {
                    parse_str(gl::EXTENSIONS)?.split(' ').map(|e| e.to_owned()).collect()
                };

                Ok(Extensions::from_names(strings.iter().map(|v| &v[..])))
            }

            pub fn from_names<'a, T>(names: T) -> Extensions
            where
                T: IntoIterator<Item = &'a str>,
            {
                let mut extensions = Extensions::default();
                for extension in names {
                    match extension {
                        $(
                            $string => extensions.$field = true,
                        )+
                        _ => ()
                    }
                }

                extensions
            }
        }
    }
}

extensions! {
    "GL_ARB_shader_objects" => gl_arb_shader_objects,
    "GL_ARB_vertex_shader" => gl_arb_vertex_shader,
    "GL_ARB_fragment_shader" => gl_arb_fragment_shader,
    "GL_ARB_vertex_buffer_object" => gl_arb_vertex_buffer_object,
    "GL_ARB_vertex_array_object" => gl_arb_vertex_array_object,
    "GL_APPLE_vertex_array_object" => gl_apple_vertex_array_object,
    "GL_OES_vertex_array_object" => gl_oes_vertex_array_object,
}

/// Represents the capabilities of the context.
///
/// Contrary to the state, these values never change.
#[derive(Debug)]
pub struct Capabilities {
    /// Returns a version or release number. Vendor-specific information may follow the version
    /// number.
    pub version: Version,

    /// The full version string, as reported by the driver.
    pub version_desc: String,

    /// The company responsible for this GL implementation.
    pub vendor: String,

    /// The name of the renderer. This name is typically specific to a particular
    /// configuration of a hardware platform.
    pub renderer: String,

    /// The list of OpenGL extensions support by this implementation.
    pub extensions: Extensions,

    /// The OpenGL context profile if available.
    ///
    /// The context profile is available from OpenGL 3.2 onwards. `None` if not supported.
    pub profile: Option<Profile>,
}

impl Capabilities {
    pub unsafe fn parse() -> Result<Capabilities> {
        let version_desc = parse_str(gl::VERSION)?;
        let version = Version::from_desc(&version_desc)?;
        let extensions = Extensions::parse(version)?;

        Ok(Capabilities {
            version,
            version_desc,
            vendor: parse_str(gl::VENDOR)?,
            renderer: parse_str(gl::RENDERER)?,
            extensions,
            profile: Capabilities::parse_profile(version),
        })
    }

    /// Checks that everything needed to compile shaders and draw from vertex arrays is
    /// available.
    pub fn check(&self) -> Result<()> {
        let exts = &self.extensions;

        if self.older_than((1, 5), (2, 0)) && !exts.gl_arb_vertex_buffer_object {
            bail!("The OpenGL implementation does not supports vertex buffer objects.");
        }

        if self.older_than((2, 0), (2, 0))
            && (!exts.gl_arb_shader_objects
                || !exts.gl_arb_vertex_shader
                || !exts.gl_arb_fragment_shader)
        {
            bail!("The OpenGL implementation does not supports shader objects.");
        }

        if self.older_than((3, 0), (3, 0))
            && !exts.gl_arb_vertex_array_object
            && !exts.gl_apple_vertex_array_object
            && !exts.gl_oes_vertex_array_object
        {
            bail!("The OpenGL implementation does not supports vertex array objects.");
        }

        Ok(())
    }

    /// Returns true if the context only exposes the core profile.
    ///
    /// ES contexts have no profiles and are always treated as core.
    pub fn is_core(&self) -> bool {
        match self.version {
            Version::ES(..) => true,
            Version::GL(..) => self.profile == Some(Profile::Core),
        }
    }

    /// Compares against the minimum version of whichever API the context implements.
    fn older_than(&self, gl: (u8, u8), es: (u8, u8)) -> bool {
        match self.version {
            Version::GL(..) => self.version < Version::GL(gl.0, gl.1),
            Version::ES(..) => self.version < Version::ES(es.0, es.1),
        }
    }

    #[inline]
    unsafe fn parse_profile(version: Version) -> Option<Profile> {
        if version >= Version::GL(3, 2) {
            let mut val = 0;
            gl::GetIntegerv(gl::CONTEXT_PROFILE_MASK, &mut val);
            let val = val as GLenum;
            if (val & gl::CONTEXT_COMPATIBILITY_PROFILE_BIT) != 0 {
                Some(Profile::Compatibility)
            } else if (val & gl::CONTEXT_CORE_PROFILE_BIT) != 0 {
                Some(Profile::Core)
            } else {
                None
            }
        } else {
            None
        }
    }
}

#[inline]
unsafe fn parse_str(id: GLenum) -> Result<String> {
    let s = gl::GetString(id);
    if s.is_null() {
        bail!("[GL] String of {} is null.", id);
    }

    String::from_utf8(ffi::CStr::from_ptr(s as *const _).to_bytes().to_vec())
        .map_err(|_| format_err!("[GL] String of {} is unformaled.", id))
}
