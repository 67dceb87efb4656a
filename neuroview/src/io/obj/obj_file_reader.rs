use std::fs::File;
use std::io::{BufRead, BufReader};

use custom_error::custom_error;

use crate::geometry::vector3::Vector3;
use crate::io::traits::{Mesh, MeshLoader, NeuroviewIOError};

custom_error! {pub ObjFileError
    ReadError {description: String} = "Failed to read file: {description}",
    VertexError {description: String} = "Failed to parse vertex: {description}",
    FaceError {description: String} = "Failed to parse face: {description}",
}

/// Line-oriented mesh file: `v x y z` lines define vertices, `f a b c` lines
/// define triangles via 1-based vertex references (only the first
/// slash-delimited segment of a reference is used). Everything else is
/// ignored.
#[derive(Debug)]
pub struct ObjFile {
    vertices: Vec<Vector3>,
    faces: Vec<[u32; 3]>,
}

impl ObjFile {

    pub const fn new() -> Self {
        ObjFile {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }
}

impl Mesh for ObjFile {

    fn vertices(&self) -> &Vec<Vector3> {
        &self.vertices
    }

    fn faces(&self) -> &Vec<[u32; 3]> {
        &self.faces
    }
}

pub struct ObjFileLoader {
}

impl ObjFileLoader {

    pub fn new() -> Self {
        Self {
        }
    }

    fn load_from<R: BufRead>(obj_file: &mut ObjFile, reader: R) -> Result<(), ObjFileError> {
        for line in reader.lines() {
            let line_data = line.map_err(|err| ObjFileError::ReadError {
                description: format!("{}", err)
            })?;

            let tokens = Self::split_line(&line_data);
            if tokens.is_empty() {
                continue;
            }

            match tokens[0].as_str() {
                "v" => Self::parse_vertex(obj_file, &tokens, &line_data)?,
                "f" => Self::parse_face(obj_file, &tokens, &line_data)?,
                other => trace!("ignoring line with prefix \"{}\": {}", other, line_data),
            }
        }

        Ok(())
    }

    pub fn split_line(str: &str) -> Vec<String> {
        let mut res = Vec::new();
        let mut value = "".to_owned();
        for c in str.chars() {
            match c {
                ' ' | '\t' => {
                    if value.len() > 0 {
                        res.push(value);
                    }
                    value = "".to_owned();
                },
                _ => value.push(c),
            };
        }
        if value.len() > 0 {
            res.push(value);
        }
        res
    }

    fn parse_vertex(file: &mut ObjFile, tokens: &[String], line: &str) -> Result<(), ObjFileError> {
        let mut coordinates = [0f64; 3];
        for (position, (coordinate, ordinal)) in coordinates.iter_mut()
            .zip(&["first", "second", "third"])
            .enumerate() {
            let token = tokens.get(position + 1).ok_or_else(|| ObjFileError::VertexError {
                description: format!("Missing {} coordinate: {}", ordinal, line)
            })?;
            *coordinate = token.parse::<f64>().map_err(|err| ObjFileError::VertexError {
                description: format!("Unable to parse {} coordinate: {}. Cause: {:?}", ordinal, line, err)
            })?;
        }

        file.vertices.push(Vector3::new(coordinates[0], coordinates[1], coordinates[2]));
        Ok(())
    }

    fn parse_face(file: &mut ObjFile, tokens: &[String], line: &str) -> Result<(), ObjFileError> {
        let mut face = [0u32; 3];
        for (position, index) in face.iter_mut().enumerate() {
            let token = tokens.get(position + 1).ok_or_else(|| ObjFileError::FaceError {
                description: format!("Expected three vertex references: {}", line)
            })?;

            // Only the position reference matters; texture and normal
            // references after the slashes are dropped.
            let reference = token.split('/').next().unwrap_or("");
            let vertex_number = reference.parse::<u32>().map_err(|err| ObjFileError::FaceError {
                description: format!("Unable to parse vertex number for face: {}. Cause: {:?}", line, err)
            })?;
            if vertex_number == 0 {
                return Err(ObjFileError::FaceError {
                    description: format!("Vertex numbers are 1-based: {}", line)
                });
            }

            *index = vertex_number - 1;
        }

        file.faces.push(face);
        Ok(())
    }
}

impl MeshLoader for ObjFileLoader {

    fn load(&self, path: &str) -> Result<Box<dyn Mesh>, NeuroviewIOError> {
        let file = File::open(path).map_err(|err| NeuroviewIOError::FailedToLoad {
            description: format!("{}: {}", path, err)
        })?;

        let mut obj_file = ObjFile::new();
        Self::load_from(&mut obj_file, BufReader::new(file))
            .map(|_| Box::new(obj_file) as Box<dyn Mesh>)
            .map_err(|err| NeuroviewIOError::FailedToLoad {
                description: format!("obj file error: {}", err)
            })
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn parse(source: &str) -> Result<ObjFile, ObjFileError> {
        let mut obj_file = ObjFile::new();
        ObjFileLoader::load_from(&mut obj_file, source.as_bytes())?;
        Ok(obj_file)
    }

    #[test]
    fn test_load_asset() {
        let mesh = ObjFileLoader::new().load("./assets/simple.obj").unwrap();

        assert_eq!(mesh.vertices().len(), 4);
        assert_eq!(mesh.faces().len(), 4);
    }

    #[test]
    fn test_broken_asset_reports_offending_line() {
        let res = ObjFileLoader::new().load("./assets/broken.obj");
        match res {
            Ok(_) => panic!("Test should fail due to bad input file!"),
            Err(err) => {
                let message = format!("{}", err);
                assert!(message.contains("Unable to parse first coordinate"), "{}", message);
                assert!(message.contains("2.292fw449"), "{}", message);
            },
        };
    }

    #[test]
    fn test_missing_file() {
        let res = ObjFileLoader::new().load("./assets/does_not_exist.obj");
        match res {
            Ok(_) => panic!("Test should fail for a missing file!"),
            Err(err) => assert!(format!("{}", err).starts_with("Failed to load mesh")),
        };
    }

    #[test]
    fn test_face_indices_are_converted_to_zero_based() {
        let obj_file = parse(concat!(
            "v 0.0 0.0 0.0\n",
            "v 1.0 0.0 0.0\n",
            "v 0.0 1.0 0.0\n",
            "v 0.0 0.0 1.0\n",
            "f 4/1/1 2/2/1 1/3/1\n",
        )).unwrap();

        assert_eq!(obj_file.faces(), &vec![[3, 1, 0]]);
    }

    #[test]
    fn test_unrelated_prefixes_are_ignored() {
        let obj_file = parse(concat!(
            "# comment\n",
            "mtllib scene.mtl\n",
            "o segmented\n",
            "v 0.0 0.0 0.0\n",
            "v 1.0 0.0 0.0\n",
            "v 0.0 1.0 0.0\n",
            "vn 0.0 0.0 1.0\n",
            "vt 0.5 0.5\n",
            "s off\n",
            "f 1 2 3\n",
            "\n",
        )).unwrap();

        assert_eq!(obj_file.vertices().len(), 3);
        assert_eq!(obj_file.faces(), &vec![[0, 1, 2]]);
    }

    #[test]
    fn test_extra_face_references_are_dropped() {
        let obj_file = parse(concat!(
            "v 0.0 0.0 0.0\n",
            "v 1.0 0.0 0.0\n",
            "v 0.0 1.0 0.0\n",
            "v 1.0 1.0 0.0\n",
            "f 1 2 3 4\n",
        )).unwrap();

        assert_eq!(obj_file.faces(), &vec![[0, 1, 2]]);
    }

    #[test]
    fn test_malformed_vertex_number() {
        let res = parse("v 0.0 0.0 0.0\nf one 2 3\n");
        match res {
            Ok(_) => panic!("Test should fail due to a malformed vertex number!"),
            Err(err) => assert!(format!("{}", err).contains("Unable to parse vertex number")),
        };
    }

    #[test]
    fn test_zero_vertex_number() {
        let res = parse("v 0.0 0.0 0.0\nf 0 1 1\n");
        assert!(res.is_err());
    }

    #[test]
    fn test_split() {
        assert_eq!(vec!["-4.43".to_owned(), "0.43".to_owned(), "3".to_owned()], ObjFileLoader::split_line(" -4.43 0.43 3  "));
    }
}
