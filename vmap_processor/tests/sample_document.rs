use std::thread;

use vmap_core::{
    Anchor, Duration, ScalarErrorPolicy, TimeOffset, Vmap, VmapError, VmapGenerationOptions,
    VmapParsingOptions, from_json, to_json,
};
use vmap_processor::{generate_vmap, parse_vmap};

const SAMPLE_VMAP: &str = include_str!("test_data/sample_vmap.xml");

fn parse_sample() -> Vmap {
    parse_vmap(SAMPLE_VMAP, &VmapParsingOptions::default())
        .expect("样本解析失败")
        .document
}

#[test]
fn test_sample_structure() {
    let document = parse_sample();

    assert_eq!(document.vmap, "http://www.iab.net/videosuite/vmap");
    assert_eq!(document.version, "1.0");
    assert_eq!(document.ad_breaks.len(), 5);

    let ids: Vec<&str> = document.ad_breaks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(
        ids,
        ["preroll", "midroll-1", "midroll-2", "overlay", "postroll"]
    );

    let offsets: Vec<Option<TimeOffset>> =
        document.ad_breaks.iter().map(|b| b.time_offset).collect();
    assert_eq!(
        offsets,
        [
            Some(TimeOffset::NamedAnchor(Anchor::Start)),
            Some(TimeOffset::Duration(Duration::from_millis(600_500))),
            Some(TimeOffset::Position(3)),
            Some(TimeOffset::Percent(0.75)),
            Some(TimeOffset::NamedAnchor(Anchor::End)),
        ]
    );
}

#[test]
fn test_sample_preroll_details() {
    let document = parse_sample();
    let preroll = document.ad_break("preroll").unwrap();

    assert_eq!(preroll.tracking_events.len(), 2);
    assert_eq!(
        preroll.tracking_events[0].url,
        "https://ads.example.com/break?e=start&b=preroll"
    );

    let vast = preroll
        .ad_source
        .as_ref()
        .and_then(|s| s.vast_data.as_ref())
        .and_then(|d| d.vast.as_ref())
        .unwrap();
    assert_eq!(vast.version, "3.0");
    assert_eq!(vast.xsi, "http://www.w3.org/2001/XMLSchema-instance");
    assert_eq!(vast.no_namespace_schema_location, "vast.xsd");
    assert_eq!(vast.ad.len(), 1);

    let ad = &vast.ad[0];
    assert_eq!(ad.id, "9412345");
    assert_eq!(ad.sequence, 1);

    let in_line = ad.in_line.as_ref().unwrap();
    assert_eq!(in_line.ad_system, "FreeWheel");
    assert_eq!(in_line.ad_title, "Spring Campaign 15s");
    assert_eq!(in_line.impression.len(), 2);
    assert_eq!(in_line.impression[0].id, "FW");
    assert_eq!(
        in_line.impression[0].url,
        "https://ads.example.com/ad/l/1?s=i&cn=defaultImpression"
    );
    assert_eq!(
        in_line.error.as_ref().map(|e| e.value.as_str()),
        Some("https://ads.example.com/error?code=[ERRORCODE]")
    );

    let creative = &in_line.creatives[0];
    assert_eq!(creative.id, "cr-1");
    assert_eq!(creative.ad_id, "9412345");
    let universal_ad_id = creative.universal_ad_id.as_ref().unwrap();
    assert_eq!(universal_ad_id.id_registry, "Ad-ID");
    assert_eq!(universal_ad_id.id, "ABCD1234000H");

    let linear = creative.linear.as_ref().unwrap();
    assert_eq!(linear.duration, Duration::from_millis(15_020));
    let events: Vec<&str> = linear
        .tracking_events
        .iter()
        .map(|t| t.event.as_str())
        .collect();
    assert_eq!(events, ["start", "firstQuartile", "complete"]);

    assert_eq!(
        linear.click_through.as_ref().map(|c| c.url.as_str()),
        Some("https://advertiser.example.com/landing")
    );
    assert_eq!(linear.click_tracking.len(), 1);
    assert_eq!(linear.custom_click[0].id, "extra");

    assert_eq!(linear.media_files.len(), 2);
    let media_file = &linear.media_files[0];
    assert_eq!(media_file.bitrate, 2000);
    assert_eq!(media_file.width, 1280);
    assert_eq!(media_file.height, 720);
    assert_eq!(media_file.delivery, "progressive");
    assert_eq!(media_file.media_type, "video/mp4");
    assert_eq!(media_file.codec, "H.264");
    assert_eq!(
        media_file.text,
        "https://cdn.example.com/creative/spring_720p.mp4"
    );
    assert_eq!(
        linear.media_files[1].text,
        "https://cdn.example.com/creative/spring.m3u8"
    );

    let extension = &in_line.extensions[0];
    assert_eq!(extension.extension_type, "FreeWheel");
    assert_eq!(extension.creative_parameters.len(), 2);
    assert_eq!(extension.creative_parameters[1].name, "brand");
    assert_eq!(extension.creative_parameters[1].value, "Spring & Co");
    assert_eq!(
        extension.creative_parameters[1].creative_parameter_type,
        "Linear"
    );
}

#[test]
fn test_generate_then_reparse() {
    let document = parse_sample();
    let lenient = VmapParsingOptions {
        scalar_error_policy: ScalarErrorPolicy::Lenient,
        ..Default::default()
    };

    for format in [false, true] {
        let options = VmapGenerationOptions {
            format,
            ..Default::default()
        };
        let generated = generate_vmap(&document, &options).unwrap();
        let reparsed = parse_vmap(&generated, &lenient).unwrap().document;
        assert_eq!(reparsed.ad_breaks.len(), document.ad_breaks.len());

        // 锚点写出为保留位置值，重新解析后变成 Position
        assert_eq!(
            reparsed.ad_breaks[0].time_offset,
            Some(TimeOffset::Position(-1))
        );
        assert_eq!(
            reparsed.ad_breaks[4].time_offset,
            Some(TimeOffset::Position(-2))
        );

        let mut preroll = document.ad_breaks[0].clone();
        preroll.time_offset = Some(TimeOffset::Position(-1));
        assert_eq!(reparsed.ad_breaks[0], preroll, "format = {format}");
        assert_eq!(reparsed.ad_breaks[1], document.ad_breaks[1], "format = {format}");
        assert_eq!(reparsed.ad_breaks[2], document.ad_breaks[2], "format = {format}");
    }
}

#[test]
fn test_percent_offsets_do_not_survive_xml_round_trip() {
    let document = parse_sample();
    let generated = generate_vmap(&document, &VmapGenerationOptions::default()).unwrap();
    assert!(generated.contains(r#"timeOffset="75.000000%""#));

    let err = parse_vmap(&generated, &VmapParsingOptions::default()).unwrap_err();
    assert!(matches!(err, VmapError::Format(ref e) if e.text == "75.000000%"));

    let lenient = VmapParsingOptions {
        scalar_error_policy: ScalarErrorPolicy::Lenient,
        ..Default::default()
    };
    let parsed = parse_vmap(&generated, &lenient).unwrap();
    assert_eq!(parsed.document.ad_breaks[3].time_offset, None);
    assert_eq!(parsed.warnings.len(), 1);
}

#[test]
fn test_json_projection_round_trip() {
    let document = parse_sample();
    let json = to_json(&document, true).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["adBreaks"][1]["timeOffset"], "00:10:00.500");
    assert_eq!(
        value["adBreaks"][0]["adSource"]["VASTData"]["vast"]["ad"][0]["inLine"]["creatives"][0]
            ["linear"]["duration"],
        "00:00:15.020"
    );
    assert_eq!(
        value["adBreaks"][0]["adSource"]["VASTData"]["vast"]["ad"][0]["inLine"]["creatives"][0]
            ["linear"]["mediaFiles"][0]["mediaType"],
        "video/mp4"
    );

    // 百分比写作 "75.000000%"，读回时只接受整数百分比
    assert_eq!(value["adBreaks"][3]["timeOffset"], "75.000000%");
    let err = from_json(&json).unwrap_err();
    assert!(matches!(
        err,
        VmapError::JsonParse { ref source, .. } if source.to_string().contains("75.000000%")
    ));
}

#[test]
fn test_json_round_trip_without_percent_offsets() {
    let mut document = parse_sample();
    document
        .ad_breaks
        .retain(|b| !matches!(b.time_offset, Some(TimeOffset::Percent(_))));
    assert_eq!(document.ad_breaks.len(), 4);

    let back = from_json(&to_json(&document, false).unwrap()).unwrap();

    // 锚点以保留位置值投影，读回后是 Position
    let mut expected = document;
    for ad_break in &mut expected.ad_breaks {
        if let Some(position) = ad_break.time_offset.and_then(|o| o.position()) {
            ad_break.time_offset = Some(TimeOffset::Position(position));
        }
    }
    assert_eq!(back, expected);
}

#[test]
fn test_concurrent_parsing_is_consistent() {
    let expected = parse_sample();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let document = parse_vmap(SAMPLE_VMAP, &VmapParsingOptions::default())
                        .unwrap()
                        .document;
                    generate_vmap(&document, &VmapGenerationOptions::default()).unwrap();
                    document
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
