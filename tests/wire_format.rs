use rig_pose::{
    ConstraintKind, Easing, ForwardKinematics, PosePipeline, Project, Property, RigError,
    RigIssue, TrackProperty,
};
use serde_json::json;

fn sample_project() -> serde_json::Value {
    json!({
        "bones": [
            { "id": "root", "parentId": null, "rotation": 0, "x": 5, "y": 5, "length": 10 },
            {
                "id": "arm",
                "parentId": "root",
                "rotation": 200,
                "length": 6,
                "locked": false,
                "visible": false,
                "constraints": [
                    { "type": "LIMIT_ROTATION", "min": -10, "max": 130, "influence": 0.5 },
                    { "type": "COPY_LOCATION" }
                ]
            },
            {
                "id": "hand",
                "parentId": "arm",
                "length": 2,
                "drivers": [
                    {
                        "sourceBoneId": "root",
                        "sourceProperty": "x",
                        "targetProperty": "rotation",
                        "factor": 2,
                        "offset": 1
                    }
                ]
            }
        ],
        "clips": [
            {
                "id": "wave",
                "name": "Wave",
                "duration": 24,
                "fps": 12,
                "tracks": [
                    {
                        "boneId": "arm",
                        "property": "rotation",
                        "keyframes": [
                            { "time": 0, "value": 0, "easing": "ease-out" },
                            { "time": 24, "value": 90, "easing": "bezier",
                              "handleOut": { "x": 0.3, "y": 0.1 } }
                        ]
                    },
                    {
                        "boneId": "hand",
                        "property": "variant",
                        "keyframes": [ { "time": 0, "value": 1 } ]
                    }
                ]
            }
        ]
    })
}

#[test]
fn parses_editor_project() {
    let project = Project::from_json(&sample_project().to_string()).unwrap();
    assert_eq!(project.bones.len(), 3);

    let arm = &project.bones[1];
    assert!(!arm.visible);
    assert_eq!(arm.constraints[0].kind, ConstraintKind::LimitRotation);
    assert_eq!(arm.constraints[0].influence, 0.5);
    assert_eq!(
        arm.constraints[1].kind,
        ConstraintKind::Other("COPY_LOCATION".into())
    );
    assert_eq!(arm.constraints[1].influence, 1.0);

    let hand = &project.bones[2];
    assert!(hand.visible);
    assert_eq!(hand.drivers[0].source_property, Property::X);
    assert_eq!(hand.drivers[0].target_property, Property::Rotation);

    let clip = project.clip("Wave").unwrap();
    assert_eq!(clip.tracks[0].keyframes[0].easing, Easing::EaseOut);
    assert_eq!(clip.tracks[0].keyframes[1].easing, Easing::Bezier);
    assert_eq!(clip.tracks[1].property, TrackProperty::Variant);
}

#[test]
fn rest_pose_from_json() {
    let project = Project::from_json(&sample_project().to_string()).unwrap();
    let pose = PosePipeline::pose(&project.bones);
    assert_eq!(pose.bones[2].rotation, 11.0);

    let derived = ForwardKinematics::evaluate(&project.bones);
    assert_eq!(derived[1].bone.rotation, -10.0);
    assert_eq!(derived[1].world_start, glam::Vec2::new(15.0, 5.0));
}

#[test]
fn sample_from_json_clip() {
    let project = Project::from_json(&sample_project().to_string()).unwrap();
    let clip = project.clip("wave").unwrap();
    let pose = PosePipeline::pose_at(&project.bones, clip, 12.0);
    // ease-out at t = 0.5 is 0.75.
    assert_eq!(pose.bones[1].rotation, 67.5);
    assert_eq!(clip.frame_at_seconds(1.0, false), 12.0);
}

#[test]
fn round_trip_keeps_unknown_constraint_tags() {
    let project = Project::from_json(&sample_project().to_string()).unwrap();
    let text = project.to_json_pretty().unwrap();
    assert!(text.contains("\"COPY_LOCATION\""));
    assert!(text.contains("\"parentId\""));
    assert!(text.contains("\"ease-out\""));
    let again = Project::from_json(&text).unwrap();
    assert_eq!(again, project);
}

#[test]
fn derived_bones_serialize_camel_case() {
    let project = Project::from_json(&sample_project().to_string()).unwrap();
    let derived = ForwardKinematics::evaluate(&project.bones);
    let value = serde_json::to_value(&derived[0]).unwrap();
    assert_eq!(value["id"], "root");
    assert!(value.get("worldStart").is_some());
    assert!(value.get("worldEnd").is_some());
    assert_eq!(value["worldRotation"], 0.0);
}

#[test]
fn lookups_and_parse_failures_are_errors() {
    let project = Project::from_json(&sample_project().to_string()).unwrap();
    assert!(matches!(project.clip("run"), Err(RigError::UnknownClip(_))));
    assert!(matches!(project.bone("tail"), Err(RigError::UnknownBone(_))));
    assert!(matches!(
        Project::from_json("{ \"bones\": [ { \"id\": 3 } ] }"),
        Err(RigError::Json(_))
    ));
}

#[test]
fn issues_surface_dangling_parents() {
    let mut value = sample_project();
    value["bones"][2]["parentId"] = json!("missing");
    let project = Project::from_json(&value.to_string()).unwrap();
    assert_eq!(
        project.issues(),
        vec![RigIssue::DanglingParent {
            bone: "hand".into(),
            parent: "missing".into()
        }]
    );
    assert_eq!(ForwardKinematics::evaluate(&project.bones).len(), 2);
}
