/// Simulated session shown by the demo GIF: record traffic, then replay it as tests.
pub const DEMO_SCRIPT: &[&str] = &[
    "$ cd backend",
    "$ npm run keploy:record",
    "",
    "🐰 Keploy agent starting...",
    "🐰 DNS server at :26789",
    "🐰 Proxy started at :16789",
    "🚀 Server running on :5000",
    "",
    "=== RECORDING TRAFFIC ===",
    "",
    "$ curl http://localhost:5000/api/generate",
    "$ curl http://localhost:5000/api/signup",
    "",
    "🐰 ✅ Test cases recorded",
    "🐰 Generated: test-1.yaml, test-2.yaml",
    "",
    "=== RUNNING TESTS ===",
    "",
    "$ npm run keploy:test",
    "",
    "🐰 Running test-1.yaml",
    "✅ PASSED",
    "",
    "🐰 Running test-2.yaml",
    "✅ PASSED",
    "",
    "📊 Coverage: 85%",
    "⏱️  Total Time: 2.34s",
    "",
    "✨ All tests passed!",
];
